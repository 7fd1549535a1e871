//! Static content: per-mood challenges, tips, reminder lines and journal
//! prompts, plus the rotating quotes and rating emoji.

use crate::models::Mood;

/// Quote-of-the-day rotation, advanced one step per refresh.
pub const QUOTES: &[&str] = &[
    "Start where you are. Use what you have. Do what you can.",
    "It's okay to rest. That is productive too.",
    "Big emotions mean you're human.",
    "Don't chase the vibe. Create it.",
    "Today is a good day to feel something new.",
    "Peace is not a place. It's a decision.",
    "Small steps each day add up to big change.",
    "You\u{2019}ve survived 100% of your worst days.",
    "Growth begins outside your comfort zone.",
    "Feelings are visitors\u{2014}let them come and go.",
    "Your pace is perfect exactly as it is.",
    "Choose progress over perfection today.",
    "Every emotion has something to teach you.",
    "You are allowed to take up space.",
    "Healing isn\u{2019}t linear\u{2014}be gentle with yourself.",
    "Courage is feeling the fear and doing it anyway.",
    "The only bad workout is the one you didn\u{2019}t do.",
    "Gratitude turns what we have into enough.",
    "Your story isn\u{2019}t over yet\u{2014}keep writing.",
    "You are stronger than your struggles.",
    "Every sunrise is a new opportunity.",
    "Small acts of self-care can transform your day.",
    "Your feelings are valid and worthy of attention.",
    "Progress, not perfection, is the goal.",
    "Let go of what you can\u{2019}t control and breathe.",
    "Joy often hides in the simplest moments.",
    "It\u{2019}s okay to ask for help when you need it.",
    "Today\u{2019}s challenges build tomorrow\u{2019}s strength.",
    "Be the calm in your own storm.",
];

/// Quote at `index`, wrapping around the list.
pub fn quote_at(index: usize) -> &'static str {
    QUOTES[index % QUOTES.len()]
}

/// Face shown next to a journal rating; "❓" outside 1..=5.
pub fn rating_emoji(rating: u8) -> &'static str {
    match rating {
        1 => "😩",
        2 => "😕",
        3 => "😐",
        4 => "🙂",
        5 => "😄",
        _ => "❓",
    }
}

impl Mood {
    /// Suggested micro-actions, shown one at a time in this order.
    pub fn challenges(&self) -> &'static [&'static str] {
        match self {
            Mood::Overwhelmed => &[
                "Take deep breaths",
                "Do a quick stretch",
                "Write out your thoughts",
                "Make a short to-do list",
                "Step away from your screen for 5 minutes",
            ],
            Mood::Happy => &[
                "Share your happiness",
                "Dance for 1 minute",
                "Write down what made you happy",
                "Send a kind message to someone",
                "Smile at yourself in the mirror",
            ],
            Mood::Excited => &[
                "Channel your energy",
                "Plan your day",
                "Talk to a friend",
                "Write down your goals",
                "Celebrate your excitement with a song",
            ],
            Mood::Calm => &[
                "Close your eyes for 1 min",
                "Listen to calm music",
                "Do deep breathing",
                "Sit in silence for 2 minutes",
                "Take a slow mindful walk",
            ],
            Mood::Angry => &[
                "Take deep breaths",
                "Write your thoughts",
                "Go for a walk",
                "Squeeze a stress ball",
                "Listen to music that matches your mood",
            ],
            Mood::Nervous => &[
                "Play a calming sound",
                "Take deep breaths",
                "Count backward from 30",
                "Write down what you're nervous about",
                "Stretch your hands and shoulders",
            ],
            Mood::Sad => &[
                "Watch something funny",
                "Talk to someone",
                "Write how you feel",
                "Draw or doodle",
                "Wrap yourself in a blanket and rest",
            ],
            Mood::Tired => &[
                "Stretch for 1 min",
                "Drink water",
                "Take a short break",
                "Do a quick face splash with cold water",
                "Turn off notifications for 10 minutes",
            ],
        }
    }

    /// Challenge at `index`, wrapping around the list.
    pub fn challenge_at(&self, index: usize) -> &'static str {
        let challenges = self.challenges();
        challenges[index % challenges.len()]
    }

    pub fn tip(&self) -> &'static str {
        match self {
            Mood::Overwhelmed => "Take it one step at a time.",
            Mood::Happy => "Keep that energy flowing!",
            Mood::Excited => "Channel that excitement into action!",
            Mood::Calm => "Enjoy this peaceful moment.",
            Mood::Angry => "Let it flow, then let it go.",
            Mood::Nervous => "You've got this. Breathe.",
            Mood::Sad => "It's okay to rest. Breathe.",
            Mood::Tired => "Rest is productive too.",
        }
    }

    /// SF Symbols name used in history lists.
    pub fn symbol(&self) -> &'static str {
        match self {
            Mood::Happy => "sun.max.fill",
            Mood::Sad => "cloud.rain.fill",
            Mood::Angry => "flame.fill",
            Mood::Excited => "sparkles",
            Mood::Nervous => "bolt.fill",
            Mood::Calm => "wind",
            Mood::Tired => "moon.zzz.fill",
            Mood::Overwhelmed => "exclamationmark.triangle.fill",
        }
    }

    /// Question asked when writing a journal entry for this mood.
    pub fn reflection_prompt(&self) -> &'static str {
        match self {
            Mood::Happy => "What made you smile the most today?",
            Mood::Sad => "Was there something specific that brought this on?",
            Mood::Angry => "What frustrated you the most today?",
            Mood::Excited => "What are you looking forward to?",
            Mood::Calm => "What helped you feel calm today?",
            Mood::Nervous => "What made you feel uncertain today?",
            Mood::Tired => "Did something wear you out today?",
            Mood::Overwhelmed => "What\u{2019}s been the hardest to manage today?",
        }
    }

    /// Body of the delayed "Mood Challenge" reminder.
    pub fn reminder(&self) -> &'static str {
        match self {
            Mood::Happy => "Send a positive text message to a loved one.",
            Mood::Calm => "Send someone a 'thank you' or 'thinking of you' text.",
            Mood::Nervous => "Take 3 deep breaths: in for 3, out for 6.",
            Mood::Sad | Mood::Overwhelmed => {
                "Write a short note to yourself like you would to a friend who's sad."
            }
            Mood::Tired => "Turn your phone screen brightness all the way down and reduce volume.",
            Mood::Excited => "Record a 30-second voice memo describing why you're excited.",
            Mood::Angry => "Draw an imaginary line in the air and erase it.",
        }
    }
}
