#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MigrationStats {
    pub lines_read: usize,
    pub lines_rewritten: usize,
}
