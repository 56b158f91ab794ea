/// Positive for surplus, negative for deficit, never clamped.
pub fn signed_overtime(worked_minutes: i64, required_minutes: i64) -> i64 {
    worked_minutes - required_minutes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_follows_the_comparison() {
        for w in (0..=1440).step_by(37) {
            for r in (0..=1440).step_by(41) {
                let o = signed_overtime(w, r);
                assert_eq!(o > 0, w > r);
                assert_eq!(o == 0, w == r);
                assert_eq!(o < 0, w < r);
            }
        }
    }

    #[test]
    fn large_values_pass_through() {
        assert_eq!(signed_overtime(0, 1920), -1920);
        assert_eq!(signed_overtime(1439, 0), 1439);
    }
}
