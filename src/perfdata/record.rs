/// One parsed step record from a trial log body.
#[derive(Clone, Debug, PartialEq)]
pub struct StepRecord {
    pub step: u64,
    /// Distance of every box to the goal shape at this step.
    pub box_dists: Vec<f64>,
    /// Precomputed average distance from the summary block.
    pub avg_dist: f64,
    /// Precomputed average distance of boxes still outside the goal.
    pub avg_outside_dist: f64,
}

const FIELD_DELIM: char = '!';
// Lines of the trailing summary block consumed by the aggregator.
const AVG_LINE: usize = 2;
const AVG_OUTSIDE_LINE: usize = 3;

/// Parses one `$`-delimited segment into a record.
///
/// Segments with fewer than two `!` fields are truncated trailing writes and
/// yield `Ok(None)`; anything else that fails to parse is an error.
pub fn parse_record(segment: &str) -> Result<Option<StepRecord>, String> {
    let fields: Vec<&str> = segment.split(FIELD_DELIM).collect();
    if fields.len() <= 1 {
        return Ok(None);
    }

    let step = second_token(fields[1])
        .ok_or_else(|| format!("step field has no step number: {:?}", fields[1]))?
        .parse::<u64>()
        .map_err(|e| format!("invalid step number: {e}"))?;

    let dist_field = fields
        .get(2)
        .ok_or_else(|| "record has no distance field".to_string())?;
    let box_dists = dist_field
        .trim()
        .split('\n')
        .map(|line| {
            line.trim()
                .parse::<f64>()
                .map_err(|e| format!("invalid box distance {line:?}: {e}"))
        })
        .collect::<Result<Vec<f64>, String>>()?;

    let summary_field = fields
        .get(3)
        .ok_or_else(|| "record has no summary field".to_string())?;
    let summary_lines: Vec<&str> = summary_field.trim().split('\n').collect();
    if summary_lines.len() <= AVG_OUTSIDE_LINE {
        return Err(format!(
            "summary block has {} lines, expected at least {}",
            summary_lines.len(),
            AVG_OUTSIDE_LINE + 1
        ));
    }
    let avg_dist = summary_value(summary_lines[AVG_LINE], "average distance")?;
    let avg_outside_dist = summary_value(summary_lines[AVG_OUTSIDE_LINE], "average outside distance")?;

    Ok(Some(StepRecord {
        step,
        box_dists,
        avg_dist,
        avg_outside_dist,
    }))
}

fn summary_value(line: &str, what: &str) -> Result<f64, String> {
    second_token(line)
        .ok_or_else(|| format!("{what} line has no value: {line:?}"))?
        .parse()
        .map_err(|e| format!("invalid {what} in {line:?}: {e}"))
}

fn second_token(s: &str) -> Option<&str> {
    s.split_whitespace().nth(1)
}
