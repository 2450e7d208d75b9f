use super::{
    direction::Direction,
    grid::{Cell, Grid},
};

/// One block of the snake
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub cell: Cell,
    /// `None` until the segment has been given a heading
    pub direction: Option<Direction>,
}

impl Segment {
    pub fn new(cell: Cell, direction: Option<Direction>) -> Self {
        Self { cell, direction }
    }
}

/// The snake: a chain of segments stored head first.
///
/// The segment at index `i + 1` trails the one at `i`. Only the head is
/// steered; every other segment inherits its heading from its predecessor
/// one tick late, which is what makes the chain bend around corners.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    segments: Vec<Segment>,
}

impl Body {
    /// A one-segment snake with no heading yet
    pub fn new(cell: Cell) -> Self {
        Self {
            segments: vec![Segment::new(cell, None)],
        }
    }

    /// Build an arbitrary chain, head first
    pub fn from_segments(head: Segment, rest: impl IntoIterator<Item = Segment>) -> Self {
        let mut segments = vec![head];
        segments.extend(rest);
        Self { segments }
    }

    pub fn head(&self) -> &Segment {
        &self.segments[0]
    }

    pub fn head_cell(&self) -> Cell {
        self.head().cell
    }

    /// Heading of the head segment
    pub fn direction(&self) -> Option<Direction> {
        self.head().direction
    }

    pub fn tail(&self) -> &Segment {
        // never empty: every constructor pushes a head
        &self.segments[self.segments.len() - 1]
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.segments.iter().map(|segment| segment.cell)
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false, a body keeps at least its head
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.cells().any(|c| c == cell)
    }

    /// Steer the head. A 180-degree reversal is ignored and reported as
    /// `false`.
    pub fn set_direction(&mut self, requested: Direction) -> bool {
        let head = &mut self.segments[0];
        if head
            .direction
            .is_some_and(|current| current.is_opposite(requested))
        {
            return false;
        }

        head.direction = Some(requested);
        true
    }

    /// Move every segment one cell along its own heading, head first, then
    /// hand each segment the heading its predecessor just used.
    ///
    /// Headings are passed down tail first so each segment reads its
    /// predecessor's value before that one is overwritten.
    pub fn advance(&mut self, grid: &Grid) {
        for segment in &mut self.segments {
            if let Some(direction) = segment.direction {
                segment.cell = grid.neighbor(segment.cell, direction);
            }
        }

        for i in (1..self.segments.len()).rev() {
            self.segments[i].direction = self.segments[i - 1].direction;
        }
    }

    /// Append a segment on top of the current tail. It has no heading until
    /// the next `advance` passes one down.
    pub fn grow(&mut self) {
        let tail = self.tail().cell;
        self.segments.push(Segment::new(tail, None));
    }

    /// True when the head shares its cell with any other segment
    pub fn head_collides(&self) -> bool {
        let head = self.head_cell();
        self.segments[1..].iter().any(|segment| segment.cell == head)
    }
}
