//! Plain-text rendering for archive and detail views.

use chrono::Local;
use somnia_core::{DreamRecord, MonthGroup};

/// Longest description preview shown in an archive line.
const LINE_PREVIEW_CHARS: usize = 60;

/// One archive line: id, short local date, stars, and a preview.
pub fn dream_line(dream: &DreamRecord) -> String {
    let local = dream.timestamp.with_timezone(&Local);
    format!(
        "  {}  {}  {}  {}",
        dream.id,
        local.format("%-d %b %I:%M %p"),
        stars(dream.rating),
        preview(&dream.description)
    )
}

/// Full detail view for a single dream.
pub fn dream_detail(dream: &DreamRecord) -> String {
    let local = dream.timestamp.with_timezone(&Local);
    let mut lines = vec![
        local.format("%A, %B %-d, %Y").to_string(),
        local.format("%I:%M %p").to_string(),
        format!("Realism: {}", stars(dream.rating)),
    ];
    if !dream.emotions.is_empty() {
        let labels: Vec<&str> = dream.emotions.iter().map(|emotion| emotion.label()).collect();
        lines.push(format!("Emotions: {}", labels.join(", ")));
    }
    lines.push(String::new());
    lines.push(dream.description.clone());
    lines.join("\n")
}

/// Month heading with an underline matching its width.
pub fn month_heading(group: &MonthGroup) -> String {
    let underline: String = "─".repeat(group.label.chars().count());
    format!("{}\n{underline}", group.label)
}

/// Five-slot star gauge for a 1 to 5 rating.
pub fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

fn preview(description: &str) -> String {
    let mut chars = description.chars();
    let head: String = chars.by_ref().take(LINE_PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}…")
    } else {
        head
    }
}

#[cfg(test)]
mod tests {
    use super::{dream_detail, dream_line, month_heading, stars};
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use somnia_core::{DreamRecord, Emotion, MonthGroup};
    use uuid::Uuid;

    fn record(description: &str, emotions: Vec<Emotion>, rating: u8) -> DreamRecord {
        DreamRecord {
            id: Uuid::new_v4(),
            description: description.to_string(),
            timestamp: Utc::now(),
            emotions,
            rating,
        }
    }

    #[test]
    fn stars_fill_up_to_the_rating() {
        assert_eq!(stars(0), "☆☆☆☆☆");
        assert_eq!(stars(3), "★★★☆☆");
        assert_eq!(stars(5), "★★★★★");
    }

    #[test]
    fn stars_clamp_out_of_range_ratings() {
        assert_eq!(stars(9), "★★★★★");
    }

    #[test]
    fn archive_line_previews_long_descriptions() {
        let long = "a".repeat(80);
        let dream = record(&long, Vec::new(), 3);
        let line = dream_line(&dream);
        assert!(line.contains(&dream.id.to_string()));
        assert!(line.ends_with(&format!("{}…", "a".repeat(60))));
    }

    #[test]
    fn archive_line_keeps_short_descriptions_whole() {
        let dream = record("short and sweet", Vec::new(), 2);
        assert!(dream_line(&dream).ends_with("short and sweet"));
    }

    #[test]
    fn detail_view_lists_emotion_labels() {
        let dream = record(
            "walking through a glass city",
            vec![Emotion::Happy, Emotion::Nostalgic],
            4,
        );
        let detail = dream_detail(&dream);
        assert!(detail.contains("Realism: ★★★★☆"));
        assert!(detail.contains("Emotions: Happy, Nostalgic"));
        assert!(detail.ends_with("walking through a glass city"));
    }

    #[test]
    fn detail_view_omits_the_emotion_line_when_untagged() {
        let detail = dream_detail(&record("untagged dream", Vec::new(), 1));
        assert!(!detail.contains("Emotions:"));
    }

    #[test]
    fn month_heading_underlines_the_label() {
        let group = MonthGroup {
            label: "August 2026".to_string(),
            dreams: Vec::new(),
        };
        let heading = month_heading(&group);
        let mut lines = heading.lines();
        assert_eq!(lines.next(), Some("August 2026"));
        let underline = lines.next().expect("underline");
        assert_eq!(underline.chars().count(), 11);
        assert!(underline.chars().all(|c| c == '─'));
    }
}
