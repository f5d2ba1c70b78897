//! Scores command - Print the allowed score scale

use std::io::Write;

use crate::errors::Result;
use crate::schemas::Score;

/// One line per score: key, then value
pub fn run(out: &mut impl Write) -> Result<()> {
    for score in Score::ALL {
        writeln!(out, "{}\t{}", score.index() + 1, score)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_nine_scores_in_order() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "1\t2.5");
        assert_eq!(lines[1], "2\t2.75");
        assert_eq!(lines[8], "9\t4.5");
    }
}
