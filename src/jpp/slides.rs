use super::orchestrator::MeetingOrchestrator;
use super::phase::JppPhase;
use super::prompts::{SLIDE_SYSTEM_PROMPT, slide_prompt};
use super::types::{MeetingResult, SlideContent};
use crate::utils::truncate_chars;

impl MeetingOrchestrator {
    /// Turn a meeting transcript into briefing slides with one direct call.
    pub async fn generate_slides(
        &self,
        phase: JppPhase,
        meeting: &MeetingResult,
    ) -> anyhow::Result<Vec<SlideContent>> {
        let excerpt = truncate_chars(&meeting.transcript, self.settings.slide_transcript_chars);
        let response = self
            .call_llm("slides", SLIDE_SYSTEM_PROMPT, &slide_prompt(phase, excerpt))
            .await?;
        let slides = parse_slides(&response);
        if slides.is_empty() {
            tracing::warn!(phase = phase.name(), "Slide response contained no SLIDE: markers");
        }
        Ok(slides)
    }
}

/// Parse the `SLIDE:` / `- ` / `NOTES:` grammar.
///
/// `SLIDE:` and `---` both close the slide in progress; only a titled
/// `SLIDE:` opens a new one. Bullets and notes outside a slide, and any other line, are
/// dropped. Never fails.
pub fn parse_slides(response: &str) -> Vec<SlideContent> {
    let mut slides = Vec::new();
    let mut current: Option<SlideContent> = None;

    for line in response.lines().map(str::trim) {
        if let Some(title) = line.strip_prefix("SLIDE:") {
            slides.extend(current.take());
            let title = title.trim();
            current = (!title.is_empty()).then(|| SlideContent {
                title: title.to_string(),
                ..SlideContent::default()
            });
        } else if line.starts_with("---") {
            slides.extend(current.take());
        } else if let Some(slide) = current.as_mut() {
            if let Some(bullet) = line.strip_prefix("- ") {
                slide.bullets.push(bullet.to_string());
            } else if let Some(notes) = line.strip_prefix("NOTES:") {
                slide.notes = notes.trim().to_string();
            }
        }
    }
    slides.extend(current);
    slides
}
