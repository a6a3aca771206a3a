use super::config::SelectionPolicy;
use super::error::EngineError;
use std::collections::HashSet;
use tracing::{debug, info};

/// Frequency and IR-intensity jobs append up to this many frames that repeat the
/// step number of the optimized structure.
pub const FREQUENCY_TAIL_TOLERANCE: usize = 2;

/// Decides which frames of a log are written.
///
/// # Arguments
///
/// * `scan_points` - The grouping key of every frame, in frame order (see
///   [`StepTuple::scan_point`](crate::core::models::frame::StepTuple::scan_point)).
/// * `policy` - The retention policy.
/// * `last_frame` - Collapse the retained frames to the last one.
///
/// # Return
///
/// The indices of retained frames in ascending order. An empty log retains nothing
/// under every policy.
///
/// # Errors
///
/// Returns [`EngineError::AmbiguousScanInput`] under [`SelectionPolicy::Auto`] when
/// more frames repeat a step number than a frequency tail explains.
pub fn resolve(
    scan_points: &[u32],
    policy: SelectionPolicy,
    last_frame: bool,
) -> Result<Vec<usize>, EngineError> {
    let mut retained: Vec<usize> = match policy {
        SelectionPolicy::All => (0..scan_points.len()).collect(),
        SelectionPolicy::Scan => last_of_each_scan_point(scan_points),
        SelectionPolicy::Auto => {
            ensure_not_a_scan(scan_points)?;
            (0..scan_points.len()).collect()
        }
    };
    debug!(
        "{:?} policy retained {} of {} frame(s).",
        policy,
        retained.len(),
        scan_points.len()
    );

    if last_frame {
        retained = retained.pop().into_iter().collect();
    }
    Ok(retained)
}

/// Keeps the last frame of every run of equal scan points, and always the final frame.
///
/// The final frame is kept even if its scan point already closed a run; for
/// `[1, 1, 2, 2, 2, 3]` this yields `[1, 4, 5]`.
pub fn last_of_each_scan_point(scan_points: &[u32]) -> Vec<usize> {
    if scan_points.is_empty() {
        return Vec::new();
    }
    let mut retained: Vec<usize> = scan_points
        .windows(2)
        .enumerate()
        .filter(|(_, pair)| pair[0] != pair[1])
        .map(|(i, _)| i)
        .collect();
    retained.push(scan_points.len() - 1);
    retained
}

fn ensure_not_a_scan(scan_points: &[u32]) -> Result<(), EngineError> {
    let distinct = scan_points.iter().collect::<HashSet<_>>().len();
    let repeats = scan_points.len() - distinct;
    if repeats > FREQUENCY_TAIL_TOLERANCE {
        return Err(EngineError::AmbiguousScanInput {
            frames: scan_points.len(),
            distinct,
        });
    }
    if repeats > 0 {
        info!(
            "{} frame(s) repeat a step number; treating them as a frequency tail.",
            repeats
        );
    }
    Ok(())
}
