//! Tests for cumulative scoring

#[cfg(test)]
mod tests {

    use tilematch::session::{Score, ScoreSink};

    #[test]
    fn test_points_accumulate() {
        let mut score = Score::new();

        score.add_points(0);
        score.add_points(1);
        score.add_points(2);

        assert_eq!(score.points(), 3);
    }

    #[test]
    fn test_adjust_can_go_negative() {
        let mut score = Score::new();

        score.add_points(5);
        score.adjust(-100);

        assert_eq!(score.points(), -95);
    }

    #[test]
    fn test_adjust_saturates() {
        let mut score = Score::new();

        score.adjust(i64::MAX);
        score.add_points(10);

        assert_eq!(score.points(), i64::MAX);
    }
}
