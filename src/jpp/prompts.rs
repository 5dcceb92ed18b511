//! Prompt assembly. Every function here is pure: same inputs, same text.

use super::phase::JppPhase;
use super::types::SlideContent;
use crate::staff::{Persona, StaffRole};

/// Shared delivery rules that keep agents sounding like officers in a room.
pub const NATURAL_SPEECH_INSTRUCTIONS: &str = r#"
CRITICAL SPEAKING RULES - FOLLOW THESE EXACTLY:

1. BANNED PHRASES - NEVER START WITH:
   - "As the J2...", "As the Fires Officer...", "As the Operations Officer..."
   - "As a reminder...", "It's important to note that...", "I want to emphasize..."
   - "From my perspective as...", "In my role as...", "Speaking as the..."
   - Any role introduction whatsoever. Everyone knows who you are.

2. INSTEAD, START WITH:
   - Your main point immediately: "We're looking at a 72-hour window before..."
   - A direct reaction: "That's going to be a problem because..."
   - A question: "Have we confirmed the enemy's capability to...?"
   - A concern: "I'm worried we're underestimating..."

3. SPEAK NATURALLY - LIKE A REAL MEETING:
   - Vary your sentence length. Mix short punchy statements with longer explanations.
   - Use professional informality when appropriate:
     * "This is going to be ugly if we don't fix X..."
     * "Look, I'm not trying to derail this, but..."
     * "We've seen this before and it didn't work..."
     * "Honestly, I'm not fully convinced that..."
   - Reference what others said: "Building on what J3 said...", "I disagree with..."
   - Ask direct questions: "J4, can you actually sustain that tempo?"

4. BE A PERSON, NOT A DOCUMENT:
   - Admit uncertainty: "I'm not 100% on this, but..."
   - Disagree constructively: "I see it differently...", "That concerns me because..."
   - Show mild frustration appropriately: "We keep running into this problem..."
   - Use domain slang naturally - don't explain every acronym

5. STRUCTURE YOUR RESPONSE:
   - ONE clear summary sentence first (max 25 words) - your main point
   - 2-4 paragraphs of substance (150-350 words total)
   - End with a clear recommendation, question, or point of contention

6. ENGAGE WITH THE ROOM:
   - Respond to previous speakers by name or role
   - Challenge assumptions others have made
   - Build coalitions: "I think J2's point reinforces what I'm seeing..."
   - Create productive tension: "But here's where I disagree..."
"#;

const OPENING_TURN: &str = "This is an OPENING TURN. You should:
- Lead with your key concern or initial assessment
- Raise important questions for the group
- Reference relevant data from your domain";

const DEVELOPMENT_TURN: &str = "This is a DEVELOPMENT TURN. You should:
- Build on or push back on what others have said
- Challenge assumptions or offer alternatives
- Propose specific solutions or options";

const REFINEMENT_TURN: &str = "This is a REFINEMENT TURN. You should:
- Synthesize discussion into concrete recommendations
- Identify remaining issues or risks
- Propose decision points or confirm coordination";

/// Turn-stage guidance: turns 1-3 open, 4-8 develop, later turns refine.
pub fn turn_guidance(turn_number: usize) -> &'static str {
    match turn_number {
        0..=3 => OPENING_TURN,
        4..=8 => DEVELOPMENT_TURN,
        _ => REFINEMENT_TURN,
    }
}

/// Inputs for one meeting turn prompt.
pub struct MeetingTurnContext<'a> {
    pub phase: JppPhase,
    pub role: StaffRole,
    pub turn_number: usize,
    pub scenario: &'a str,
    pub prior_context: &'a str,
    pub conversation_so_far: &'a str,
    pub persona: &'a Persona,
    pub personality: &'a str,
}

pub fn meeting_prompt(ctx: &MeetingTurnContext<'_>) -> String {
    let config = ctx.phase.config();
    let prior = if ctx.prior_context.is_empty() {
        "This is the first phase; no prior context."
    } else {
        ctx.prior_context
    };
    let conversation = if ctx.conversation_so_far.is_empty() {
        "[Meeting just started - you are among the first to speak]"
    } else {
        ctx.conversation_so_far
    };

    format!(
        r#"You are {designation}, the {title}.

You are in a staff meeting for the "{phase_name}" phase of the Joint Planning Process.

{culture}
{personality}
{speech}

=== MEETING CONTEXT ===
Topic: {topic}
Key Outputs: {outputs}
Focus Areas: {focus}

=== SCENARIO ===
{scenario}

=== PRIOR PLANNING CONTEXT ===
{prior}

=== CONVERSATION SO FAR ===
{conversation}

=== YOUR TURN (Turn #{turn}) ===
{guidance}

RESPONSE FORMAT:
- Start with ONE summary sentence (your main point in ≤25 words)
- Then 2-4 paragraphs of detail (150-350 words total)
- Reference what others said and respond to them
- End with a clear point, question, or recommendation

NOW SPEAK YOUR TURN:"#,
        designation = ctx.persona.full_designation(),
        title = ctx.role.title(),
        phase_name = config.name,
        culture = ctx.persona.culture_description(),
        personality = ctx.personality,
        speech = NATURAL_SPEECH_INSTRUCTIONS,
        topic = config.topic,
        outputs = config.key_outputs.join(", "),
        focus = config.focus_areas.join(", "),
        scenario = ctx.scenario,
        turn = ctx.turn_number,
        guidance = turn_guidance(ctx.turn_number),
    )
}

pub fn brief_prompt(
    phase: JppPhase,
    role: StaffRole,
    persona: &Persona,
    personality: &str,
    slide_content: &str,
    questions_so_far: &str,
) -> String {
    let questions = if questions_so_far.is_empty() {
        "[You are presenting first]"
    } else {
        questions_so_far
    };
    format!(
        r#"You are {designation}, the {title}.

You are briefing the Commander on your section's findings from the {phase_name} phase.
{personality}

SPEAKING RULES:
- DO NOT start with "As the J2..." or similar role introductions
- Start with your bottom line up front (one sentence summary)
- Be direct and speak naturally like you're in the room
- If responding to a question, give a direct answer first, then explain

=== YOUR SLIDE CONTENT ===
{slide_content}

=== QUESTIONS/DISCUSSION SO FAR ===
{questions}

BRIEFING GUIDELINES:
1. Lead with ONE summary sentence of your main finding
2. Present key points concisely but with substance
3. Highlight risks, concerns, or outstanding issues
4. If responding to a question, be direct and specific

Your briefing should be 100-200 words - executive summary style.

DELIVER YOUR BRIEF:"#,
        designation = persona.full_designation(),
        title = role.title(),
        phase_name = phase.name(),
    )
}

/// System prompt for the Commander's direct question calls.
pub fn commander_system_prompt(commander: &Persona) -> String {
    format!("You are {}, the Commander.", commander.full_designation())
}

pub fn commander_question_prompt(briefer: StaffRole, brief: &str) -> String {
    format!(
        "You are the Commander. The {} just briefed:\n\n{brief}\n\n\
         Ask ONE pointed question that:\n\
         1. Probes a potential weakness or gap\n\
         2. Seeks clarification on a critical point\n\
         3. Tests an assumption\n\n\
         Keep your question to 1-2 sentences. Be direct and commanding.",
        briefer.title()
    )
}

pub fn answer_prompt(question: &str) -> String {
    format!(
        "The Commander just asked you:\n{question}\n\n\
         Provide a direct, substantive answer. Be specific and honest about any limitations."
    )
}

/// Serialize one briefer's share of the slides.
///
/// Slides are split evenly by index; the last briefer takes the remainder.
pub fn slides_for_role(slides: &[SlideContent], role_idx: usize, total_roles: usize) -> String {
    if slides.is_empty() || total_roles == 0 {
        return "[No slides generated yet]".to_string();
    }
    let per_role = (slides.len() / total_roles).max(1);
    let start = (role_idx * per_role).min(slides.len());
    let end = if role_idx + 1 < total_roles {
        (start + per_role).min(slides.len())
    } else {
        slides.len()
    };

    let mut lines = Vec::new();
    for slide in &slides[start..end] {
        lines.push(format!("SLIDE: {}", slide.title));
        lines.extend(slide.bullets.iter().map(|b| format!("  - {b}")));
    }
    lines.join("\n")
}

pub fn guidance_prompt(
    phase: JppPhase,
    commander_personality: &str,
    scenario: &str,
    meeting_summary: &str,
    brief_summary: &str,
) -> String {
    let next_phase = phase.next().map_or("Plan Execution", JppPhase::name);
    format!(
        r#"You are the Commander presiding over the {phase_name} phase.

Your staff has just completed their meeting and briefed you on their findings.
{commander_personality}

SPEAKING RULES:
- Speak naturally and directly, like you're in the room
- Start with your overall assessment in one sentence
- Be decisive - make clear calls where needed
- Reference specific staff contributions when relevant

=== SCENARIO ===
{scenario}

=== STAFF MEETING SUMMARY ===
{meeting_summary}

=== STAFF BRIEF SUMMARY ===
{brief_summary}

=== YOUR TASK ===
Issue Commander's Guidance for the next phase ({next_phase}).

Your guidance should:
1. ASSESS the situation and staff work (one sentence bottom line first)
2. DECIDE on outstanding issues requiring your decision
3. PRIORITIZE the next phase's focus areas
4. DIRECT specific sections on what you need from them
5. ACCEPT RISK where appropriate and explain briefly

FORMAT:
1. COMMANDER'S ASSESSMENT: [Start with one-sentence bottom line]
2. DECISIONS: [What you're deciding now]
3. PRIORITY TASKS: [What sections should focus on]
4. RISK GUIDANCE: [Risks you're accepting and why]
5. INTENT FOR NEXT PHASE: [How to proceed]

Be substantive and specific. Your guidance shapes the next phase.

ISSUE YOUR GUIDANCE:"#,
        phase_name = phase.name(),
    )
}

pub const SLIDE_SYSTEM_PROMPT: &str = "You are a military staff officer creating briefing slides.
Convert the meeting transcript into structured slide content.

OUTPUT FORMAT (JSON-like structure):
For each slide, provide:
- SLIDE TITLE: Clear, concise title
- BULLETS: 4-6 key points as bullet items
- NOTES: Speaker notes with additional detail

Create slides for each major topic discussed. Be SPECIFIC and SUBSTANTIVE.
Use actual content from the transcript, not generic placeholders.";

pub fn slide_prompt(phase: JppPhase, transcript_excerpt: &str) -> String {
    format!(
        r#"Create briefing slides for the {phase_name} phase.

=== KEY OUTPUTS REQUIRED ===
{outputs}

=== MEETING TRANSCRIPT ===
{transcript_excerpt}

=== INSTRUCTIONS ===
Create 4-8 slides covering:
1. Title slide with phase name and date
2. Key findings/analysis
3. Staff assessments by functional area
4. Decisions made
5. Outstanding issues
6. Way ahead / Next steps

Format each slide as:
---
SLIDE: [Title]
- Bullet 1
- Bullet 2
- Bullet 3
- Bullet 4
NOTES: [Speaker notes]
---"#,
        phase_name = phase.name(),
        outputs = phase.config().key_outputs.join(", "),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::staff::PersonaGenerator;

    fn persona(role: StaffRole) -> Persona {
        PersonaGenerator::new(Some(11)).generate(role)
    }

    #[test]
    fn turn_guidance_stages() {
        assert!(turn_guidance(1).starts_with("This is an OPENING TURN"));
        assert!(turn_guidance(3).starts_with("This is an OPENING TURN"));
        assert!(turn_guidance(4).starts_with("This is a DEVELOPMENT TURN"));
        assert!(turn_guidance(8).starts_with("This is a DEVELOPMENT TURN"));
        assert!(turn_guidance(9).starts_with("This is a REFINEMENT TURN"));
    }

    #[test]
    fn meeting_prompt_fills_placeholders_for_first_turn() {
        let p = persona(StaffRole::J2);
        let prompt = meeting_prompt(&MeetingTurnContext {
            phase: JppPhase::MissionAnalysis,
            role: StaffRole::J2,
            turn_number: 1,
            scenario: "Deter aggression.",
            prior_context: "",
            conversation_so_far: "",
            persona: &p,
            personality: "",
        });
        assert!(prompt.starts_with(&format!("You are {}, the J2 Intelligence Officer.", p.full_designation())));
        assert!(prompt.contains("\"Mission Analysis\" phase"));
        assert!(prompt.contains("This is the first phase; no prior context."));
        assert!(prompt.contains("[Meeting just started - you are among the first to speak]"));
        assert!(prompt.contains("=== YOUR TURN (Turn #1) ==="));
        assert!(prompt.contains("Key Outputs: METT-TC Analysis, Restated Mission, CCIRs, Assumptions"));
        assert!(prompt.ends_with("NOW SPEAK YOUR TURN:"));
    }

    #[test]
    fn meeting_prompt_includes_context_verbatim() {
        let p = persona(StaffRole::J4);
        let prompt = meeting_prompt(&MeetingTurnContext {
            phase: JppPhase::CoaDevelopment,
            role: StaffRole::J4,
            turn_number: 12,
            scenario: "S",
            prior_context: "PRIOR-XYZ",
            conversation_so_far: "**MAJ Lee (J2 - Intelligence)**: hi",
            persona: &p,
            personality: "\nYOUR PERSONALITY AND SPEAKING STYLE:\n",
        });
        assert!(prompt.contains("PRIOR-XYZ"));
        assert!(prompt.contains("**MAJ Lee (J2 - Intelligence)**: hi"));
        assert!(prompt.contains("REFINEMENT TURN"));
        assert!(prompt.contains("YOUR PERSONALITY AND SPEAKING STYLE"));
    }

    #[test]
    fn guidance_prompt_names_next_phase() {
        let prompt = guidance_prompt(JppPhase::CoaComparison, "", "S", "M", "B");
        assert!(prompt.contains("next phase (COA Approval)"));
        let last = guidance_prompt(JppPhase::PlanDevelopment, "", "S", "M", "B");
        assert!(last.contains("next phase (Plan Execution)"));
    }

    fn slide(title: &str) -> SlideContent {
        SlideContent {
            title: title.into(),
            bullets: vec![format!("{title} point")],
            notes: String::new(),
        }
    }

    #[test]
    fn slides_split_evenly_with_remainder_to_last() {
        let slides: Vec<_> = ["A", "B", "C", "D", "E"].into_iter().map(slide).collect();
        assert_eq!(slides_for_role(&slides, 0, 2), "SLIDE: A\n  - A point\nSLIDE: B\n  - B point");
        let last = slides_for_role(&slides, 1, 2);
        assert!(last.starts_with("SLIDE: C"));
        assert!(last.contains("SLIDE: E"));
    }

    #[test]
    fn fewer_slides_than_roles() {
        let slides = vec![slide("Only")];
        assert_eq!(slides_for_role(&slides, 0, 3), "SLIDE: Only\n  - Only point");
        assert_eq!(slides_for_role(&slides, 1, 3), "");
        assert_eq!(slides_for_role(&slides, 2, 3), "");
        assert_eq!(slides_for_role(&[], 0, 3), "[No slides generated yet]");
    }

    #[test]
    fn question_prompt_names_briefer() {
        let q = commander_question_prompt(StaffRole::J3, "We attack at dawn.");
        assert!(q.starts_with("You are the Commander. The J3 Operations Officer just briefed:"));
        assert!(q.contains("We attack at dawn."));
    }
}
