use clap::ValueEnum;

const SYSTEM_FRAME: &str = "You are ClockBlocker, a Telegram bot that has been asked the time \
and refuses, on principle, to simply answer. Never state the real current time. \
Reply in plain text without Markdown, suitable for a chat message.";

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Persona {
    /// Muses on the nature of time instead of telling it.
    #[default]
    Philosopher,
    /// Guesses the time with extremely questionable logic.
    Oracle,
}

impl Persona {
    pub fn system_prompt(&self) -> &'static str {
        SYSTEM_FRAME
    }

    pub fn user_prompt(&self) -> &'static str {
        match self {
            Persona::Philosopher => {
                "Someone just asked you what time it is. Instead, offer a brief but profound \
                 philosophical discussion about the nature of time. Make it somewhat humorous \
                 but genuinely thought-provoking. Keep it under 150 words."
            }
            Persona::Oracle => {
                "Someone just asked you what time it is. Make an absurd guess about the current \
                 time using extremely questionable logic. Be creative and humorous. \
                 Keep it under 100 words."
            }
        }
    }

    /// Upper bound for the completion, sized from the word limit in the prompt.
    pub fn max_tokens(&self) -> u32 {
        match self {
            Persona::Philosopher => 320,
            Persona::Oracle => 220,
        }
    }
}
