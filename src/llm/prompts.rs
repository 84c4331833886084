//! Prompt templates for metric extraction and the two-stage insight pipeline.
//!
//! Each function returns a fully rendered prompt string. Keeping the
//! templates in one place makes it possible to review exactly what the
//! model sees without chasing format strings through the pipeline code.

/// Prompt for extracting numeric health metrics from a single diary entry.
pub fn metric_extraction_prompt(diary_text: &str) -> String {
    format!(
        r#"You are a health data extraction specialist. Analyze this diary entry and extract numeric health metrics.

DIARY ENTRY: "{diary_text}"

CRITICAL SCORING GUIDELINES:
- mood_score: 1=very depressed/sad, 5=neutral, 10=extremely happy/great
- energy_level: 1=exhausted/no energy, 5=normal energy, 10=very energetic
- pain_level: 0=no pain at all, 5=moderate pain, 10=severe/unbearable pain
- sleep_quality: 1=terrible sleep/insomnia, 5=okay sleep, 10=excellent restful sleep
- sleep_hours: actual number of hours slept (e.g., 7.5, 8, 4)
- stress_level: 0=completely relaxed/no stress, 5=normal stress, 10=extremely stressed

Only assign a score when the entry gives real evidence for it. Use null for anything the entry does not mention.

Extract and return ONLY valid JSON in this exact format:
{{
  "mood_score": [1-10 number or null],
  "energy_level": [1-10 number or null],
  "pain_level": [0-10 number or null],
  "sleep_quality": [1-10 number or null],
  "sleep_hours": [number of hours or null],
  "stress_level": [0-10 number or null],
  "ai_confidence": [0.0-1.0 number indicating extraction confidence]
}}"#
    )
}

/// Stage 1 of the insight pipeline: identify specific, named triggers from
/// the week's entries cross-referenced with the statistical correlations.
pub fn trigger_analysis_prompt(entries_json: &str, correlations_json: &str) -> String {
    format!(
        r#"You are an expert health detective specializing in identifying SPECIFIC triggers from diary entries.

ANALYSIS TASK: Examine these diary entries and identify specific, named triggers that correlate with negative health symptoms.

DATA TO ANALYZE:
{entries_json}

CORRELATION INSIGHTS FROM STATISTICAL ANALYSIS:
{correlations_json}

TRIGGER DETECTION GUIDELINES:

1. FOOD TRIGGERS - Look for specific mentions of:
- Specific foods, ingredients, spices, or dishes
- Eating patterns, meal timing, or food combinations
- Food preparation methods (fried, leftover, spicy, etc.)
- Beverages, alcohol, caffeine intake

2. ENVIRONMENTAL TRIGGERS - Look for:
- Weather conditions (humidity, temperature, pressure changes)
- Air quality, pollution, allergens, dust
- Lighting conditions (bright lights, screens, darkness)
- Noise levels, sound environments
- Location changes, travel, different environments

3. SOCIAL/EMOTIONAL TRIGGERS - Identify:
- Social situations, conflicts, or interactions
- Work stress, deadlines, meetings
- Family dynamics, relationship issues
- Financial concerns, life changes

4. LIFESTYLE TRIGGERS - Detect:
- Sleep patterns, sleep quality, sleep timing
- Exercise timing, intensity, or lack thereof
- Screen time, device usage patterns
- Routine disruptions, schedule changes

5. PHYSICAL TRIGGERS - Note:
- Posture changes, physical positions
- Hormone cycles, menstrual patterns
- Medication timing or changes
- Physical exertion, overuse injuries

ANALYSIS METHODOLOGY:
- For each diary entry, identify the day's health scores
- Look for entries where pain/stress/mood significantly worsened
- Cross-reference what specific items were mentioned on those days
- Identify patterns across multiple entries
- Focus on NAMED, SPECIFIC triggers rather than vague categories

REQUIRED OUTPUT FORMAT (valid JSON):
{{
    "specific_triggers": [
        {{
            "trigger_name": "Old green tea leaves",
            "category": "food",
            "evidence_strength": "strong",
            "occurrences": 3,
            "symptoms_triggered": ["headache", "increased pain"],
            "evidence_dates": ["2024-06-15", "2024-06-17"],
            "explanation": "Mentioned consuming old green tea leaves on 3 occasions, all coinciding with headache reports within 2-4 hours"
        }}
    ],
    "environmental_patterns": [
        {{
            "pattern": "Humid weather correlation",
            "strength": "moderate",
            "explanation": "Higher pain scores on days with humidity mentions"
        }}
    ],
    "behavioral_insights": [
        "Late dinner timing (after 8pm) shows correlation with poor sleep quality",
        "Working late correlates with next-day headaches"
    ]
}}

BE EXTREMELY SPECIFIC - name exact foods, specific environmental conditions, particular social situations, etc. Avoid generic terms like "certain foods" - instead identify "leftover rice", "spicy chutney", etc."#
    )
}

/// Stage 2 of the insight pipeline: turn the trigger analysis into the
/// five actionable insight lists the summary exposes.
pub fn insight_synthesis_prompt(trigger_json: &str) -> String {
    format!(
        r#"You are a health strategist creating actionable recommendations based on trigger analysis.

TRIGGER ANALYSIS RESULTS:
{trigger_json}

YOUR TASK: Create specific, actionable insights and recommendations.

OUTPUT FORMAT (valid JSON):
{{
    "key_insights": [
        "Identified pickles as a potential headache trigger (3/3 occurrences)",
        "Leftover rice consumption preceded pain increases in 2/2 instances"
    ],
    "potential_triggers": [
        "pickles (strong correlation with headaches)",
        "Leftover rice (moderate correlation with digestive issues)",
        "High humidity days (environmental trigger for pain)",
        "Late work sessions (stress-related trigger)"
    ],
    "recommendations": [
        "Eliminate pickles for 2 weeks and track headache frequency",
        "Avoid leftover rice or reheat thoroughly before consumption",
        "Monitor weather patterns and take preventive measures on high humidity days",
        "Set work cutoff time at 7pm to reduce next-day headache risk"
    ],
    "areas_of_concern": [
        "Recurring headaches with dietary pattern correlation",
        "Sleep quality degradation during stressful periods"
    ],
    "positive_patterns": [
        "Early morning exercise correlates with better mood scores",
        "Consistent 8+ hours sleep shows strong energy improvements"
    ]
}}

Make each recommendation SPECIFIC and ACTIONABLE with clear next steps."#
    )
}
