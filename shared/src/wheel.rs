use rand::seq::SliceRandom;
use rand::Rng;

use crate::quiz::Question;

/// Where the pointer sits in wheel coordinates: 0 degrees is 3 o'clock and
/// angles grow clockwise, so the top of the wheel is 270.
pub const POINTER_DEGREES: f64 = 270.0;

/// Tuning knobs for a spin. The defaults reproduce the intended feel: a
/// four second spin with at least five full turns, landing somewhere in
/// the middle 80% of the winning segment, with ticks that start rapid and
/// decelerate until they die out near the end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinTuning {
    pub duration_ms: u32,
    pub min_full_spins: u32,
    /// Half-width of the landing jitter, as a fraction of one segment.
    pub jitter_fraction: f64,
    pub tick_start_ms: f64,
    pub tick_growth: f64,
    pub tick_max_ms: f64,
}

impl Default for SpinTuning {
    fn default() -> Self {
        Self {
            duration_ms: 4000,
            min_full_spins: 5,
            jitter_fraction: 0.4,
            tick_start_ms: 50.0,
            tick_growth: 1.1,
            tick_max_ms: 400.0,
        }
    }
}

/// Angular width of one segment. Callers guarantee `total >= 1`; the
/// configuration layer rejects an empty question bank before any wheel
/// geometry is computed.
pub fn segment_angle(total: usize) -> f64 {
    360.0 / total as f64
}

/// Draws one not-yet-answered question uniformly at random. Returns `None`
/// only when every question has been answered.
pub fn pick_winner<'a, R: Rng>(
    questions: &'a [Question],
    answered_ids: &[String],
    rng: &mut R,
) -> Option<&'a Question> {
    let available: Vec<&Question> = questions
        .iter()
        .filter(|q| !answered_ids.contains(&q.id))
        .collect();
    available.choose(rng).copied()
}

/// Computes the new cumulative rotation that parks the winning segment
/// under the pointer. The result is always strictly ahead of
/// `current_rotation` by at least `min_full_spins` full turns, even after
/// the (possibly negative) landing jitter is applied.
pub fn compute_target_rotation<R: Rng>(
    winner_index: usize,
    total: usize,
    current_rotation: f64,
    tuning: &SpinTuning,
    rng: &mut R,
) -> f64 {
    let seg = segment_angle(total);
    let center = winner_index as f64 * seg + seg / 2.0;
    // The floor is padded by the jitter half-width so a negative draw
    // cannot eat into the guaranteed minimum number of turns.
    let floor = current_rotation
        + tuning.min_full_spins as f64 * 360.0
        + tuning.jitter_fraction * seg;
    let mut target = POINTER_DEGREES - center;
    while target < floor {
        target += 360.0;
    }
    let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * tuning.jitter_fraction * seg;
    target + jitter
}

/// Everything captured at the moment a spin is accepted: the winner (a
/// clone, so later edits to the round cannot change what the completion
/// callback delivers), its slot in the full ordered question list, and the
/// committed target rotation.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinPlan {
    pub question: Question,
    pub winner_index: usize,
    pub target_rotation: f64,
}

/// Selects a winner and solves its rotation in one step. The winner is
/// sampled from the unanswered subset, but the rotation is keyed to its
/// index in the full list so answered segments keep their place and number
/// between spins.
pub fn plan_spin<R: Rng>(
    questions: &[Question],
    answered_ids: &[String],
    current_rotation: f64,
    tuning: &SpinTuning,
    rng: &mut R,
) -> Option<SpinPlan> {
    let winner = pick_winner(questions, answered_ids, rng)?;
    let winner_index = questions.iter().position(|q| q.id == winner.id)?;
    let question = winner.clone();
    let target_rotation =
        compute_target_rotation(winner_index, questions.len(), current_rotation, tuning, rng);
    Some(SpinPlan {
        question,
        winner_index,
        target_rotation,
    })
}

/// Index of the segment resting under the pointer at a given cumulative
/// rotation. Inverse of the pointer-alignment arithmetic in
/// [`compute_target_rotation`].
pub fn segment_under_pointer(rotation: f64, total: usize) -> usize {
    let seg = segment_angle(total);
    let unrotated = (POINTER_DEGREES - rotation).rem_euclid(360.0);
    ((unrotated / seg) as usize).min(total - 1)
}

/// Waits between successive spin ticks. The caller plays the first tick
/// immediately; this iterator yields the delays that follow, each a factor
/// longer than the last, ending once a single wait reaches the ceiling or
/// the accumulated time reaches the spin duration.
#[derive(Debug, Clone)]
pub struct TickCadence {
    delay_ms: f64,
    elapsed_ms: f64,
    growth: f64,
    max_delay_ms: f64,
    budget_ms: f64,
}

impl TickCadence {
    pub fn new(tuning: &SpinTuning) -> Self {
        Self {
            delay_ms: tuning.tick_start_ms,
            elapsed_ms: 0.0,
            growth: tuning.tick_growth,
            max_delay_ms: tuning.tick_max_ms,
            budget_ms: tuning.duration_ms as f64,
        }
    }
}

impl Iterator for TickCadence {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        self.delay_ms *= self.growth;
        self.elapsed_ms += self.delay_ms;
        if self.delay_ms >= self.max_delay_ms || self.elapsed_ms >= self.budget_ms {
            return None;
        }
        Some(self.delay_ms.round() as u32)
    }
}

/// Live wheel state for one mounted wheel view.
///
/// `rotation` is the cumulative rotation in degrees. It only ever grows and
/// is never wrapped into `[0, 360)`, so every spin is solved against the
/// wheel's true visual orientation. `is_spinning` blocks re-entry for the
/// whole animation window. The whole struct is transient: a reload or view
/// switch starts a fresh session without touching game progress.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelSession {
    pub rotation: f64,
    pub is_spinning: bool,
}

impl WheelSession {
    pub fn new() -> Self {
        Self {
            rotation: 0.0,
            is_spinning: false,
        }
    }

    /// Starts a spin if the wheel is idle and a question is still
    /// available. On success the target rotation is committed immediately
    /// and the busy flag goes up. Otherwise returns `None` and leaves the
    /// session untouched, so a click on a busy or finished wheel is a
    /// silent no-op.
    pub fn try_begin_spin<R: Rng>(
        &mut self,
        questions: &[Question],
        answered_ids: &[String],
        tuning: &SpinTuning,
        rng: &mut R,
    ) -> Option<SpinPlan> {
        if self.is_spinning {
            log::info!("Spin requested while the wheel is busy, ignoring.");
            return None;
        }
        let plan = plan_spin(questions, answered_ids, self.rotation, tuning, rng)?;
        self.rotation = plan.target_rotation;
        self.is_spinning = true;
        Some(plan)
    }

    /// Ends the animation window. Called exactly once by the completion
    /// timer; the rotation keeps its committed value.
    pub fn finish_spin(&mut self) {
        self.is_spinning = false;
    }
}

impl Default for WheelSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    fn sample_questions(n: usize) -> Vec<Question> {
        (1..=n)
            .map(|i| Question {
                id: i.to_string(),
                text: format!("Question {}", i),
                options: ["A".to_string(), "B".to_string()],
                correct_index: 0,
            })
            .collect()
    }

    fn no_jitter() -> SpinTuning {
        SpinTuning {
            jitter_fraction: 0.0,
            ..SpinTuning::default()
        }
    }

    #[test]
    fn test_pick_winner_only_from_unanswered() {
        let questions = sample_questions(8);
        let answered: Vec<String> = questions
            .iter()
            .filter(|q| q.id != "5")
            .map(|q| q.id.clone())
            .collect();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..50 {
            let winner = pick_winner(&questions, &answered, &mut rng);
            assert_eq!(winner.map(|q| q.id.as_str()), Some("5"));
        }
    }

    #[test]
    fn test_pick_winner_empty_pool() {
        let questions = sample_questions(3);
        let answered: Vec<String> = questions.iter().map(|q| q.id.clone()).collect();
        let mut rng = StdRng::seed_from_u64(2);
        assert!(pick_winner(&questions, &answered, &mut rng).is_none());
    }

    #[test]
    fn test_pick_winner_roughly_uniform() {
        let questions = sample_questions(4);
        let answered = Vec::new();
        let mut rng = StdRng::seed_from_u64(7);
        let mut counts: HashMap<String, u32> = HashMap::new();
        for _ in 0..4000 {
            let winner = pick_winner(&questions, &answered, &mut rng).unwrap();
            *counts.entry(winner.id.clone()).or_insert(0) += 1;
        }
        assert_eq!(counts.len(), 4);
        for (_, count) in counts {
            // expected 1000 each; a seeded run stays well inside this band
            assert!((800..=1200).contains(&count), "skewed count: {}", count);
        }
    }

    #[test]
    fn test_target_rotation_known_layout() {
        // 8 segments of 45 degrees, winner in slot 3: center 157.5, base
        // 270 - 157.5 = 112.5, ratcheted past five full turns to 1912.5.
        let mut rng = StdRng::seed_from_u64(3);
        let target = compute_target_rotation(3, 8, 0.0, &no_jitter(), &mut rng);
        assert!((target - 1912.5).abs() < 1e-9);
        assert_eq!(segment_under_pointer(target, 8), 3);
    }

    #[test]
    fn test_target_rotation_jitter_stays_in_band() {
        let tuning = SpinTuning::default();
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let target = compute_target_rotation(3, 8, 0.0, &tuning, &mut rng);
            // jitter half-width is 0.4 * 45 = 18 degrees around 1912.5
            assert!(target >= 1894.5 - 1e-9 && target <= 1930.5 + 1e-9, "target {}", target);
            assert_eq!(segment_under_pointer(target, 8), 3);
        }
    }

    #[test]
    fn test_target_rotation_always_spins_forward() {
        let tuning = SpinTuning::default();
        let mut rng = StdRng::seed_from_u64(11);
        let mut rotation = 0.0;
        for spin in 0..100 {
            let winner = spin % 8;
            let target = compute_target_rotation(winner, 8, rotation, &tuning, &mut rng);
            assert!(
                target >= rotation + 5.0 * 360.0 - 1e-9,
                "spin {} did not clear the minimum: {} -> {}",
                spin,
                rotation,
                target
            );
            rotation = target;
        }
    }

    #[test]
    fn test_pointer_recovers_winner_for_every_slot() {
        let tuning = SpinTuning::default();
        let mut rng = StdRng::seed_from_u64(13);
        for total in [1usize, 2, 5, 8, 12] {
            let mut rotation = 0.0;
            for winner in 0..total {
                rotation = compute_target_rotation(winner, total, rotation, &tuning, &mut rng);
                assert_eq!(segment_under_pointer(rotation, total), winner);
            }
        }
    }

    #[test]
    fn test_tick_cadence_default_shape() {
        let delays: Vec<u32> = TickCadence::new(&SpinTuning::default()).collect();
        assert_eq!(delays.len(), 21);
        assert_eq!(delays[0], 55);
        assert!(delays.windows(2).all(|w| w[0] < w[1]));
        assert!(delays.iter().all(|&d| d < 400));
        let total: u32 = delays.iter().sum();
        assert!(total < 4000, "cadence overran the spin: {}", total);
    }

    #[test]
    fn test_tick_cadence_respects_short_budget() {
        let tuning = SpinTuning {
            duration_ms: 1000,
            ..SpinTuning::default()
        };
        let delays: Vec<u32> = TickCadence::new(&tuning).collect();
        assert!(!delays.is_empty());
        let mut elapsed = 0u32;
        for delay in delays {
            elapsed += delay;
            assert!(elapsed < 1000);
        }
    }

    #[test]
    fn test_plan_spin_keys_rotation_to_full_list() {
        let questions = sample_questions(8);
        let answered: Vec<String> = questions
            .iter()
            .filter(|q| q.id != "7")
            .map(|q| q.id.clone())
            .collect();
        let mut rng = StdRng::seed_from_u64(17);
        let plan = plan_spin(&questions, &answered, 0.0, &no_jitter(), &mut rng).unwrap();
        // only one question is left, but its segment is still slot 6 of 8
        assert_eq!(plan.question.id, "7");
        assert_eq!(plan.winner_index, 6);
        assert_eq!(segment_under_pointer(plan.target_rotation, 8), 6);
    }

    #[test]
    fn test_session_blocks_reentry_until_finished() {
        let questions = sample_questions(8);
        let answered = Vec::new();
        let tuning = SpinTuning::default();
        let mut rng = StdRng::seed_from_u64(19);
        let mut session = WheelSession::new();

        let first = session.try_begin_spin(&questions, &answered, &tuning, &mut rng);
        assert!(first.is_some());
        assert!(session.is_spinning);
        let committed = session.rotation;
        assert!(committed > 0.0);

        // a second spin during the animation window changes nothing
        let second = session.try_begin_spin(&questions, &answered, &tuning, &mut rng);
        assert!(second.is_none());
        assert_eq!(session.rotation, committed);
        assert!(session.is_spinning);

        session.finish_spin();
        assert!(!session.is_spinning);
        assert_eq!(session.rotation, committed);

        let third = session.try_begin_spin(&questions, &answered, &tuning, &mut rng);
        assert!(third.is_some());
        assert!(session.rotation > committed);
    }

    #[test]
    fn test_session_noop_when_round_is_over() {
        let questions = sample_questions(3);
        let answered: Vec<String> = questions.iter().map(|q| q.id.clone()).collect();
        let tuning = SpinTuning::default();
        let mut rng = StdRng::seed_from_u64(23);
        let mut session = WheelSession::new();
        assert!(session
            .try_begin_spin(&questions, &answered, &tuning, &mut rng)
            .is_none());
        assert!(!session.is_spinning);
        assert_eq!(session.rotation, 0.0);
    }

    #[test]
    fn test_session_winner_is_captured_at_spin_start() {
        let questions = sample_questions(4);
        let mut answered = Vec::new();
        let tuning = SpinTuning::default();
        let mut rng = StdRng::seed_from_u64(29);
        let mut session = WheelSession::new();
        let plan = session
            .try_begin_spin(&questions, &answered, &tuning, &mut rng)
            .unwrap();
        // answers recorded mid-spin do not disturb the captured winner
        answered.push("1".to_string());
        answered.push("2".to_string());
        assert!(questions.iter().any(|q| q.id == plan.question.id));
        assert_eq!(questions[plan.winner_index].id, plan.question.id);
    }

    #[test]
    fn test_single_segment_wheel() {
        let questions = sample_questions(1);
        let tuning = SpinTuning::default();
        let mut rng = StdRng::seed_from_u64(31);
        let plan = plan_spin(&questions, &[], 0.0, &tuning, &mut rng).unwrap();
        assert_eq!(plan.winner_index, 0);
        assert!(plan.target_rotation >= 5.0 * 360.0 - 1e-9);
        assert_eq!(segment_under_pointer(plan.target_rotation, 1), 0);
    }
}
