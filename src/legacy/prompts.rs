//! Prompt templates for the sequential planner.

pub fn mission_analysis(scenario: &str) -> String {
    format!(
        "You are participating in MISSION ANALYSIS for the following scenario:

=== SCENARIO ===
{scenario}
=================

Analyze this scenario from your staff perspective. Provide:
1. Key factors relevant to your functional area
2. Specified and implied tasks you identify
3. Constraints and restraints affecting your area
4. Critical information requirements (CCIRs) you recommend
5. Initial assessment of risks and opportunities

Be thorough but concise. Use your retrieval tools if doctrine guidance would help."
    )
}

pub fn threat_assessment(scenario: &str) -> String {
    format!(
        "Based on the scenario and your mission analysis, provide a focused THREAT ASSESSMENT:

=== SCENARIO ===
{scenario}
=================

Provide:
1. Most Likely Enemy COA (MLCOA)
2. Most Dangerous Enemy COA (MDCOA)
3. Key adversary capabilities and vulnerabilities
4. Intelligence gaps and collection priorities
5. Indications and Warnings to monitor"
    )
}

pub fn initial_guidance(staff_inputs: &str, threat: &str) -> String {
    format!(
        "You have received mission analysis inputs from your staff:

{staff_inputs}

=== J2 THREAT ASSESSMENT ===
{threat}
============================

Based on this analysis:
1. State your initial Commander's Intent (Purpose, Key Tasks, End State)
2. Issue planning guidance to focus COA development
3. Identify your Commander's Critical Information Requirements (CCIRs)
4. State acceptable levels of risk"
    )
}

/// Shared context block for COA development.
pub fn coa_context(scenario: &str, guidance: &str, threat: &str) -> String {
    format!(
        "
=== SCENARIO ===
{scenario}

=== COMMANDER'S GUIDANCE ===
{guidance}

=== THREAT ASSESSMENT ===
{threat}
"
    )
}

pub fn coa_concepts(context: &str) -> String {
    format!(
        "Based on the mission analysis and Commander's guidance, develop 3 distinct Courses of Action (COAs).

{context}

For each COA, provide:
1. COA Name and Concept Statement
2. Main Effort and Supporting Efforts
3. Decisive Points and Lines of Operation/Effort
4. Key Phases and Transitions
5. Branches and Sequels
6. What makes this COA distinct from others

COAs should be:
- Feasible (can accomplish mission within constraints)
- Acceptable (worth the cost)
- Suitable (accomplishes the mission)
- Distinguishable (significantly different from each other)
- Complete (incorporates all elements)"
    )
}

pub fn coa_details(context: &str, concepts: &str) -> String {
    format!(
        "The J5 has developed COA concepts. Add operational detail to each:

{context}

=== COA CONCEPTS ===
{concepts}
====================

For each COA, add:
1. Task organization and force allocation
2. Synchronization of warfighting functions
3. Timing and phasing details
4. Critical coordination requirements
5. Key decision points"
    )
}

pub fn functional_review(context: &str, details: &str) -> String {
    format!(
        "Review the following COAs and provide your functional input:

{context}

=== COA DETAILS ===
{details}
===================

From your functional perspective:
1. What does your section need to provide for each COA?
2. What are the key requirements for each COA?
3. Are there significant differences in your requirements between COAs?"
    )
}

pub fn analysis_context(concepts: &str, details: &str) -> String {
    format!(
        "
=== COA CONCEPTS ===
{concepts}

=== COA DETAILS ===
{details}
"
    )
}

pub fn red_team(context: &str) -> String {
    format!(
        "You are the RED TEAM. War-game enemy responses to each friendly COA:

{context}

For each COA:
1. How would the enemy most likely respond?
2. What friendly vulnerabilities could they exploit?
3. What are the critical friendly actions and enemy reactions?
4. Where might our plan fail?
5. What surprises could the enemy achieve?

Be adversarial. Think like the enemy. Challenge optimistic assumptions."
    )
}

pub fn execution_risk(context: &str, red_team: &str) -> String {
    format!(
        "Based on the COAs and Red Team analysis, assess execution risks:

{context}

=== RED TEAM ANALYSIS ===
{red_team}
========================

For each COA, identify:
1. Risk to mission (things that could cause mission failure)
2. Risk to force (things that could cause excessive casualties)
3. Critical decision points where things could go wrong
4. Mitigation measures for key risks"
    )
}

pub fn wargame(context: &str, red_team: &str) -> String {
    format!(
        "Participate in wargaming the COAs:

{context}

=== RED TEAM ANALYSIS ===
{red_team}
========================

From your functional area:
1. What are critical actions and events in your area for each COA?
2. How might enemy actions affect your functional area?
3. What risks and decision points are relevant to your area?
4. What branches might be needed?"
    )
}

pub fn legal_review(context: &str, red_team: &str) -> String {
    format!(
        "Review each COA for legal and ethical compliance:

{context}

=== RED TEAM ANALYSIS ===
{red_team}
========================

For each COA:
1. Are there LOAC/IHL concerns?
2. What are the collateral damage risks?
3. Are there ROE constraints or requirements?
4. Any concerns with autonomous systems employment?
5. Recommendations for ensuring legal compliance"
    )
}

pub fn comparison(concepts: &str, red_team: &str, legal: &str) -> String {
    format!(
        "Compare the three COAs from your functional perspective.

=== COA CONCEPTS ===
{concepts}

=== RED TEAM ANALYSIS ===
{red_team}

=== LEGAL REVIEW ===
{legal}

Evaluate each COA against these criteria from YOUR perspective:
1. Feasibility (Can we do it with available resources?)
2. Acceptability (Is the cost worth the benefit?)
3. Suitability (Does it accomplish the mission?)
4. Distinguishability (Does this COA offer unique advantages?)
5. Completeness (Does it address all requirements?)

Provide your ranking of COAs (1st, 2nd, 3rd) with justification."
    )
}

pub fn comparison_synthesis(staff_inputs: &str) -> String {
    format!(
        "Synthesize the staff COA comparison inputs into a decision briefing format:

=== STAFF COMPARISON INPUTS ===
{staff_inputs}
===============================

Provide:
1. Summary of each COA's strengths and weaknesses
2. Comparative analysis across evaluation criteria
3. Risk comparison (risk to mission, risk to force)
4. Staff recommendation with rationale"
    )
}

pub fn coa_selection(synthesis: &str, red_team: &str, legal: &str) -> String {
    format!(
        "You must now SELECT the Course of Action.

=== COMPARISON SYNTHESIS ===
{synthesis}

=== RED TEAM WARNINGS ===
{red_team}

=== LEGAL CONSIDERATIONS ===
{legal}

As the Commander:
1. STATE your selected COA and why
2. REFINE the Commander's Intent based on the selected COA
3. IDENTIFY acceptable risk and how to mitigate unacceptable risk
4. ISSUE guidance for plan development
5. STATE your CCIR updates if any"
    )
}

pub fn base_plan(decision: &str, details: &str) -> String {
    format!(
        "Develop the operational plan based on the selected COA.

=== COMMANDER'S DECISION ===
{decision}

=== SELECTED COA DETAILS ===
{details}

Develop the plan including:
1. SITUATION (Enemy, Friendly, Attachments/Detachments)
2. MISSION (Who, What, When, Where, Why)
3. EXECUTION (Commander's Intent, Concept of Operations, Tasks to Subordinate Units)
4. SUSTAINMENT (Logistics, Personnel, Medical)
5. COMMAND AND SIGNAL (C2, Communications)

Include:
- Phase lines and objectives
- Coordinating instructions
- Fire support coordination measures
- Synchronization matrix"
    )
}

pub fn annex(base_plan: &str) -> String {
    format!(
        "Develop your annex to the operational plan:

=== BASE PLAN ===
{base_plan}
=================

Develop your functional annex including:
1. Situation specific to your area
2. Mission and tasks for your functional area
3. Execution details and synchronization
4. Sustainment/support requirements
5. Command relationships and coordination"
    )
}

pub fn final_order(scenario: &str, decision: &str, base_plan: &str, annexes: &str) -> String {
    format!(
        "Issue the FINAL OPERATION ORDER.

=== SCENARIO ===
{scenario}

=== COMMANDER'S DECISION & INTENT ===
{decision}

=== DEVELOPED PLAN ===
{base_plan}

=== KEY ANNEXES SUMMARY ===
{annexes}

Issue the final, unified OPERATION ORDER that integrates:
1. Complete 5-paragraph order format
2. Commander's intent (clearly stated)
3. Concept of operations with phases
4. Task organization
5. Coordinating instructions
6. Key decision points and branches
7. Risk mitigation measures
8. Success criteria and assessment framework"
    )
}
