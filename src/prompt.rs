// src/prompt.rs
use std::io;

use crate::catalog::MealEntry;

pub const PROMPT_QUALIFIERS: &str = "High quality, realistic, appetizing, 16:9 aspect ratio, \
natural lighting, wooden chopping board background, food styling, no text or watermarks.";

pub const SUGGESTED_TOOLS: &[&str] = &[
    "DALL-E 3",
    "Midjourney",
    "Stable Diffusion",
    "Canva's AI Image Generator",
    "Bing Image Creator",
];

pub fn rule() -> String {
    "=".repeat(50)
}

pub fn generation_prompt(meal: &MealEntry) -> String {
    format!(
        "Professional food photography: {}. {}",
        meal.description, PROMPT_QUALIFIERS
    )
}

/// Prompt section plus the tool trailer, as printed after a batch.
pub fn render_report(entries: &[MealEntry]) -> String {
    let mut out = format!("📝 AI Image Generation Prompts:\n{}\n", rule());
    for meal in entries {
        out.push_str(&format!("\n🍽️  {}:\n   {}\n", meal.name, generation_prompt(meal)));
    }
    out.push_str("\n💡 Use these prompts with:\n");
    for tool in SUGGESTED_TOOLS {
        out.push_str(&format!("- {tool}\n"));
    }
    out
}

pub fn write_report<W: io::Write>(mut w: W, entries: &[MealEntry]) -> io::Result<()> {
    w.write_all(render_report(entries).as_bytes())?;
    w.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MEALS;

    fn tacos() -> &'static MealEntry {
        MEALS.iter().find(|m| m.name == "Beef Tacos").unwrap()
    }

    #[test]
    fn prompt_embeds_description_and_qualifiers() {
        let meal = tacos();
        let p = generation_prompt(meal);
        assert!(p.starts_with("Professional food photography: Crispy taco shells"));
        assert!(p.contains(meal.description));
        assert!(p.contains("16:9 aspect ratio"));
        assert!(p.ends_with("no text or watermarks."));
    }

    #[test]
    fn report_has_heading_per_meal() {
        let report = render_report(MEALS);
        assert!(report.contains("🍽️  Beef Tacos:"));
        for meal in MEALS {
            assert!(report.contains(&format!("🍽️  {}:", meal.name)));
            assert!(report.contains(meal.description));
        }
        assert_eq!(report.matches("no text or watermarks").count(), MEALS.len());
    }

    #[test]
    fn report_ends_with_tool_trailer() {
        let report = render_report(&[]);
        assert!(report.starts_with("📝 AI Image Generation Prompts:\n"));
        let trailer = report.split("💡 Use these prompts with:\n").nth(1).unwrap();
        let tools: Vec<&str> = trailer.lines().collect();
        assert_eq!(tools, vec![
            "- DALL-E 3",
            "- Midjourney",
            "- Stable Diffusion",
            "- Canva's AI Image Generator",
            "- Bing Image Creator",
        ]);
    }

    #[test]
    fn report_layout_for_single_meal() {
        let meal = MealEntry::new("Beef Tacos", "Tacos on a board");
        let report = render_report(&[meal]);
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[0], "📝 AI Image Generation Prompts:");
        assert_eq!(lines[1], "=".repeat(50));
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "🍽️  Beef Tacos:");
        assert_eq!(lines[4], format!("   {}", generation_prompt(&meal)));
        assert_eq!(lines[5], "");
        assert_eq!(lines[6], "💡 Use these prompts with:");
        assert_eq!(lines.len(), 7 + SUGGESTED_TOOLS.len());
    }

    #[test]
    fn write_report_matches_render() {
        let mut buf = Vec::new();
        write_report(&mut buf, &MEALS[..2]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), render_report(&MEALS[..2]));
    }
}
