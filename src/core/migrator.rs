use crate::core::color::ColorRule;
use crate::domain::model::MigrationStats;
use crate::domain::ports::LineRule;
use crate::utils::error::Result;
use std::borrow::Cow;
use std::io::{BufRead, Write};

/// Ordered sequence of line rules. Each rule sees the output of the previous one.
pub struct Migrator {
    rules: Vec<Box<dyn LineRule>>,
}

impl Migrator {
    /// The standard migration: currently the color rule only.
    pub fn new() -> Result<Self> {
        Ok(Self::empty().with_rule(ColorRule::new()?))
    }

    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn with_rule<R: LineRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    pub fn migrate_line<'a>(&self, line: &'a str) -> Result<Cow<'a, str>> {
        let mut current = Cow::Borrowed(line);
        for rule in &self.rules {
            let rewritten = match rule.apply(&current)? {
                Cow::Borrowed(_) => continue,
                Cow::Owned(rewritten) => rewritten,
            };
            tracing::trace!("Rule '{}' rewrote line", rule.name());
            current = Cow::Owned(rewritten);
        }
        Ok(current)
    }

    /// Reads `reader` line by line, terminators included, and writes each
    /// migrated line to `writer`. Stops at the first failing line.
    pub fn run<R: BufRead, W: Write>(&self, mut reader: R, mut writer: W) -> Result<MigrationStats> {
        let mut stats = MigrationStats::default();
        let mut line = String::new();

        loop {
            line.clear();
            if reader.read_line(&mut line)? == 0 {
                break;
            }
            stats.lines_read += 1;

            let migrated = self.migrate_line(&line)?;
            if let Cow::Owned(_) = migrated {
                stats.lines_rewritten += 1;
                tracing::debug!("Migrated line {}: {}", stats.lines_read, migrated.trim_end());
            }
            writer.write_all(migrated.as_bytes())?;
        }

        writer.flush()?;
        Ok(stats)
    }
}

impl std::fmt::Debug for Migrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Migrator")
            .field("rules", &self.rule_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    struct UppercaseRule;

    impl LineRule for UppercaseRule {
        fn name(&self) -> &str {
            "uppercase"
        }

        fn apply<'a>(&self, line: &'a str) -> Result<Cow<'a, str>> {
            if line.starts_with('#') {
                Ok(Cow::Owned(line.to_uppercase()))
            } else {
                Ok(Cow::Borrowed(line))
            }
        }
    }

    fn run_to_string(migrator: &Migrator, input: &str) -> (String, MigrationStats) {
        let mut output = Vec::new();
        let stats = migrator.run(Cursor::new(input), &mut output).unwrap();
        (String::from_utf8(output).unwrap(), stats)
    }

    #[test]
    fn test_default_rules() {
        let migrator = Migrator::new().unwrap();
        assert_eq!(migrator.rule_names(), vec!["color"]);
    }

    #[test]
    fn test_empty_migrator_is_identity() {
        let migrator = Migrator::empty();
        let result = migrator.migrate_line("\"rgb_(1,2,3)\"\n").unwrap();
        assert_eq!(result, "\"rgb_(1,2,3)\"\n");
    }

    #[test]
    fn test_rules_are_chained_in_order() {
        let migrator = Migrator::new().unwrap().with_rule(UppercaseRule);
        let result = migrator.migrate_line("# \"rgb_(171,205,239)\"").unwrap();
        assert_eq!(result, "# \"ABCDEF\"");
    }

    #[test]
    fn test_run_preserves_lines_and_terminators() {
        let migrator = Migrator::new().unwrap();
        let input = "a: \"rgb_(0,0,0)\"\r\nplain\n\nlast: \"rgb_(255,0,16)\"";
        let (output, stats) = run_to_string(&migrator, input);

        assert_eq!(output, "a: \"000000\"\r\nplain\n\nlast: \"ff0010\"");
        assert_eq!(stats.lines_read, 4);
        assert_eq!(stats.lines_rewritten, 2);
    }

    #[test]
    fn test_run_empty_input() {
        let migrator = Migrator::new().unwrap();
        let (output, stats) = run_to_string(&migrator, "");
        assert!(output.is_empty());
        assert_eq!(stats, MigrationStats::default());
    }

    #[test]
    fn test_run_stops_on_overflow() {
        let migrator = Migrator::new().unwrap();
        let mut output = Vec::new();
        let input = "ok: \"rgb_(1,2,3)\"\nbad: \"rgb_(1,2,99999999999999999999999)\"\nnever\n";
        let result = migrator.run(Cursor::new(input), &mut output);

        assert!(result.is_err());
        assert_eq!(String::from_utf8(output).unwrap(), "ok: \"010203\"\n");
    }

    #[test]
    fn test_run_rejects_invalid_utf8() {
        let migrator = Migrator::new().unwrap();
        let input: &[u8] = b"ok\n\xff\xfe\n";
        let result = migrator.run(input, Vec::new());
        assert!(result.is_err());
    }
}
