pub mod dataset;
pub mod seeded_random;
pub mod synthesizer;
