use std::io::{self, Write};

use super::HandSizeSweep;

pub const CSV_HEADER: &str = "hand_size,hand_type,probability,count,rank";

/// Write a sweep as CSV, one row per possible category per hand size.
///
/// ```
/// use hand_census::analysis::CountMode;
/// use hand_census::report::{HandSizeSweep, write_csv};
///
/// let sweep = HandSizeSweep::run(13, 4, 1, [5], CountMode::Inclusive).unwrap();
/// let mut out = Vec::new();
/// write_csv(&sweep, &mut out).unwrap();
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.starts_with("hand_size,hand_type,probability,count,rank\n"));
/// ```
pub fn write_csv<W: Write>(sweep: &HandSizeSweep, mut writer: W) -> io::Result<()> {
    writeln!(writer, "{CSV_HEADER}")?;
    for result in sweep.results() {
        let hand_size = result.shape().hand_size();
        let ranking = result.rarity_ranking();
        for row in result.iter().filter(|c| c.is_possible()) {
            let rank = ranking
                .iter()
                .position(|c| c.category == row.category)
                .map_or(0, |idx| idx + 1);
            writeln!(
                writer,
                "{},{},{},{},{}",
                hand_size,
                row.category.key(),
                row.probability,
                row.count,
                rank
            )?;
        }
    }
    writer.flush()
}
