//! Reply text for analysis results

/// Influence percentage above which content is flagged high risk
pub const HIGH_INFLUENCE: i64 = 75;

/// Influence percentage above which content is flagged moderate
pub const MODERATE_INFLUENCE: i64 = 40;

/// Convert a 0..1 fraction to a whole percentage, rounding halves up
pub fn percentage(fraction: f64) -> i64 {
    (fraction * 100.0 + 0.5).floor() as i64
}

/// Sentence for an image detection verdict
pub fn image_verdict(is_ai: bool, confidence: f64) -> String {
    let verdict = if is_ai {
        "appears to be"
    } else {
        "does not appear to be"
    };
    format!(
        "According to BitMind's Deepfake Detection Subnet, the image {} AI-generated ({}% confidence of AI generation).",
        verdict,
        percentage(confidence)
    )
}

/// Qualitative phrase for an influence percentage
pub fn influence_phrase(percent: i64) -> &'static str {
    if percent > HIGH_INFLUENCE {
        "high synthetic probability detected. approach with caution."
    } else if percent > MODERATE_INFLUENCE {
        "moderate AI patterns present. verification recommended."
    } else {
        "low synthetic markers. likely authentic content."
    }
}

/// Sentence for a URL influence score
pub fn influence_report(score: f64) -> String {
    let percent = percentage(score);
    format!(
        "matrix scan complete. url shows {}% AI influence rating. {}",
        percent,
        influence_phrase(percent)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_rounding() {
        assert_eq!(percentage(0.87), 87);
        assert_eq!(percentage(0.0), 0);
        assert_eq!(percentage(1.0), 100);
        assert_eq!(percentage(0.125), 13);
        assert_eq!(percentage(0.994), 99);
    }

    #[test]
    fn test_image_verdict_ai() {
        let text = image_verdict(true, 0.87);
        assert!(text.contains("appears to be"));
        assert!(!text.contains("does not"));
        assert!(text.contains("87%"));
    }

    #[test]
    fn test_image_verdict_not_ai() {
        let text = image_verdict(false, 0.12);
        assert!(text.contains("does not appear to be"));
        assert!(text.contains("12%"));
    }

    #[test]
    fn test_influence_high() {
        let text = influence_report(0.8);
        assert!(text.contains("80%"));
        assert!(text.ends_with("high synthetic probability detected. approach with caution."));
    }

    #[test]
    fn test_influence_moderate() {
        let text = influence_report(0.5);
        assert!(text.contains("50%"));
        assert!(text.contains("moderate AI patterns present"));
    }

    #[test]
    fn test_influence_low_at_boundary() {
        let text = influence_report(0.4);
        assert!(text.contains("40%"));
        assert!(text.contains("low synthetic markers"));
    }

    #[test]
    fn test_phrase_boundaries_are_exclusive() {
        assert_eq!(influence_phrase(75), influence_phrase(41));
        assert_ne!(influence_phrase(76), influence_phrase(75));
        assert_eq!(influence_phrase(40), influence_phrase(0));
    }
}
