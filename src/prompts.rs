//! Prompt templates sent to the model.

pub const HOOKS_PROMPT: &str = r#"You are an expert social media content creator specializing in creating engaging short-form video content.
Your task is to generate 5 distinct, catchy, and attention-grabbing hooks for a social media reel based on the user's provided reel idea.

Each hook should be designed to maximize audience engagement within the first few seconds of the video.
Focus on intriguing questions, bold statements, or curiosity-inducing phrases.

Reel Idea: {idea}

Generate exactly 5 hooks as a JSON array of strings. Reply with the array only."#;

pub const DESCRIPTION_PROMPT: &str = r#"You are an expert video editor and director. Your task is to provide a detailed, bulleted description for shooting and editing a short video reel based on the given hook. The description should cover camera shots, editing techniques, specific transitions, and highlight key words or phrases using markdown bold (**keyword**).

Structure your response clearly with headings like "Shooting Guide", "Editing Guide", and "Transitions". Put each heading on its own line wrapped in double asterisks, and start every bullet with "- ".

Reel Hook: {hook}

Follow this layout:

**Shooting Guide:**
- Consider a **dynamic opening shot** using a **tracking motion** to immediately grab attention.
- Use a **mix of close-ups** to emphasize details and **wide shots** for context. Ensure good **lighting** for clarity.

**Editing Guide:**
- Maintain a **fast pace** to keep viewers engaged. Keep clips **short and impactful**.
- Utilize **sound design** effectively, including **background music** and **sound effects** to enhance the mood.
- Implement **color grading** to create a consistent and **professional look**.

**Transitions:**
- Use **jump cuts** for quick, energetic scene changes. Alternatively, explore **L-cuts** or **J-cuts** for seamless audio transitions.
- A **match cut** can create visual continuity between different scenes. Consider a **whip pan** for an exciting transition."#;

pub fn hooks_prompt(idea: &str) -> String {
    HOOKS_PROMPT.replace("{idea}", idea.trim())
}

pub fn description_prompt(hook: &str) -> String {
    DESCRIPTION_PROMPT.replace("{hook}", hook.trim())
}
