#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChangeSummaryLine {
    pub added: u64,
    pub deleted: u64,
}

impl ChangeSummaryLine {
    pub fn parse(row: &str) -> Self {
        let mut fields = row.split('\t');
        let added = parse_count(fields.next());
        let deleted = parse_count(fields.next());
        Self { added, deleted }
    }

    pub fn total(&self) -> u64 {
        self.added.saturating_add(self.deleted)
    }
}

// Binary files report `-` in place of a count.
fn parse_count(field: Option<&str>) -> u64 {
    field
        .and_then(|value| value.trim().parse::<u64>().ok())
        .unwrap_or(0)
}

pub fn total_changed_lines(raw: &str) -> u64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0;
    }

    trimmed
        .split('\n')
        .map(ChangeSummaryLine::parse)
        .fold(0u64, |sum, line| sum.saturating_add(line.total()))
}
