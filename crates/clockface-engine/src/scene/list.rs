use super::DrawCmd;

/// Recorded draw stream for a frame.
///
/// Commands are painted in insertion order, so later commands land on top.
/// `clear()` keeps the allocation, so a list reused across frames stops
/// allocating once warmed.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns items in paint order.
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(cmd);
    }

    /// Iterates line commands only, in paint order.
    pub fn lines(&self) -> impl Iterator<Item = &super::LineCmd> {
        self.items.iter().filter_map(|c| match c {
            DrawCmd::Line(l) => Some(l),
            _ => None,
        })
    }

    /// Iterates text commands only, in paint order.
    pub fn texts(&self) -> impl Iterator<Item = &super::TextCmd> {
        self.items.iter().filter_map(|c| match c {
            DrawCmd::Text(t) => Some(t),
            _ => None,
        })
    }
}
