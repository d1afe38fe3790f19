// Prompt templates for the advisory flows.
// Placeholders are `{name}` and are filled by `flows::fill_template`.
// Shared persona and JSON rules live in llm_client::prompts.

/// Role line for the fertilizer flow's system prompt.
pub const FERTILIZER_ROLE: &str =
    "You recommend fertilizer schedules from soil test values and crop needs.";

/// Replace: {crop}, {soil_type}, {soil_ph}, {nitrogen}, {phosphorus}, {potassium},
///          {farm_size_acres}, {region}
pub const FERTILIZER_PROMPT_TEMPLATE: &str = r#"Recommend fertilizers for the following farm.

FARM DETAILS:
- Crop: {crop}
- Soil type: {soil_type}
- Soil pH: {soil_ph}
- Nitrogen (N) level: {nitrogen}
- Phosphorus (P) level: {phosphorus}
- Potassium (K) level: {potassium}
- Farm size: {farm_size_acres} acres
- Region: {region}

Return a JSON object with this EXACT schema:
{
  "recommendations": [
    {
      "fertilizer": "Urea (46% N)",
      "quantity_kg_per_acre": 40.0,
      "timing": "Split: half at sowing, half 30 days after sowing",
      "method": "Broadcast and incorporate into moist soil"
    }
  ],
  "general_advice": "One short paragraph on balancing nutrients and avoiding overuse."
}

RULES:
1. Give between 1 and 5 recommendations, most important first
2. quantity_kg_per_acre is a number per acre, not for the whole farm
3. Correct the weakest nutrient first; do not add a nutrient already rated high
4. If the pH is outside 6.0-7.5, mention lime or gypsum in general_advice"#;

pub const ORGANIC_ROLE: &str =
    "You help farmers move to certified organic practices without losing their income.";

/// Replace: {crop}, {farm_size_acres}, {current_practices}, {challenges}, {region}
pub const ORGANIC_PROMPT_TEMPLATE: &str = r#"Advise this farmer on organic farming.

FARM DETAILS:
- Crop: {crop}
- Farm size: {farm_size_acres} acres
- Current practices: {current_practices}
- Main challenges: {challenges}
- Region: {region}

Return a JSON object with this EXACT schema:
{
  "practices": [
    {
      "practice": "Jeevamrut application",
      "description": "How to prepare and apply it on this farm",
      "benefits": "What the farmer gains and how soon"
    }
  ],
  "transition_plan": "A season-by-season plan for the next three years.",
  "certification_tips": "Practical steps towards PGS-India or NPOP certification."
}

RULES:
1. Give between 3 and 6 practices that address the stated challenges
2. Only use inputs a farmer can make on the farm or buy locally
3. Keep each description under 60 words"#;

pub const PESTICIDE_ROLE: &str =
    "You recommend pest and disease control following integrated pest management.";

/// Replace: {crop}, {pest_or_disease}, {severity}, {affected_area_acres},
///          {prefer_organic}, {region}
pub const PESTICIDE_PROMPT_TEMPLATE: &str = r#"Recommend control measures for this pest or disease problem.

PROBLEM DETAILS:
- Crop: {crop}
- Pest or disease: {pest_or_disease}
- Severity: {severity}
- Affected area: {affected_area_acres} acres
- Farmer prefers organic control: {prefer_organic}
- Region: {region}

Return a JSON object with this EXACT schema:
{
  "recommendations": [
    {
      "product": "Neem oil 1500 ppm",
      "kind": "organic",
      "dosage": "5 ml per litre of water",
      "method": "Foliar spray in the evening, repeat after 7 days",
      "safety_precautions": "Wear gloves and a mask; keep away from water bodies"
    }
  ],
  "ipm_tips": ["Install yellow sticky traps at 10 per acre"],
  "warning": "Any important caution, or an empty string"
}

RULES:
1. "kind" must be exactly one of "chemical", "biological", "organic"
2. If the farmer prefers organic control, recommend ONLY biological or organic products
3. Escalate to chemical control only when severity is severe
4. Give between 1 and 4 recommendations and between 2 and 5 ipm_tips"#;

pub const SOIL_HEALTH_ROLE: &str =
    "You assess soil health from basic test values and recommend how to improve it.";

/// Replace: {soil_type}, {soil_ph}, {organic_matter_percent}, {nitrogen}, {phosphorus},
///          {potassium}, {moisture}, {crop_history}, {region}
pub const SOIL_HEALTH_PROMPT_TEMPLATE: &str = r#"Assess the health of this soil.

SOIL TEST:
- Soil type: {soil_type}
- pH: {soil_ph}
- Organic matter: {organic_matter_percent}%
- Nitrogen (N): {nitrogen}
- Phosphorus (P): {phosphorus}
- Potassium (K): {potassium}
- Moisture: {moisture}
- Crops grown in the last three seasons: {crop_history}
- Region: {region}

Return a JSON object with this EXACT schema:
{
  "health_score": 72,
  "assessment": "Two or three sentences summarising the soil's condition.",
  "improvements": [
    {
      "action": "Add 2 tonnes of farmyard manure per acre",
      "reason": "Organic matter is below 1%",
      "timeframe": "Before the next sowing"
    }
  ],
  "suitable_crops": ["Chickpea", "Sorghum"]
}

RULES:
1. health_score is an integer from 0 (degraded) to 100 (excellent)
2. Give between 2 and 5 improvements, most urgent first
3. suitable_crops lists 3 to 6 crops that fit this soil and region"#;
