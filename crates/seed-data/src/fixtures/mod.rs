//! Static problem fixtures.
//!
//! The fixture set is compiled into the binary as `&'static` data:
//! - [`SAMPLE`]: the original starter problems
//! - [`ADDITIONAL`]: a short follow-up set
//! - [`MORE`]: a larger interview-style set
//!
//! Nothing here is validated or deduplicated. "Merge Two Sorted Lists"
//! appears twice on purpose and is stored twice.

mod additional;
mod more;
mod sample;

pub use additional::ADDITIONAL;
pub use more::MORE;
pub use sample::SAMPLE;

use problems::models::{Difficulty, Example, Language, NewProblem, ReferenceSolution, TestCase};

/// One input/expected-output pair. Multi-argument inputs are newline separated.
#[derive(Debug, Clone, Copy)]
pub struct FixtureTestCase {
    pub input: &'static str,
    pub output: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct FixtureExample {
    pub input: &'static str,
    pub output: &'static str,
    pub explanation: &'static str,
}

/// A hard-coded problem record.
#[derive(Debug, Clone, Copy)]
pub struct ProblemFixture {
    pub title: &'static str,
    pub description: &'static str,
    pub difficulty: Difficulty,
    pub tags: &'static [&'static str],
    pub companies: &'static [&'static str],
    pub constraints: &'static str,
    pub hints: Option<&'static str>,
    pub editorial: Option<&'static str>,
    pub testcases: &'static [FixtureTestCase],
    pub examples: &'static [(Language, FixtureExample)],
    pub code_snippets: &'static [(Language, &'static str)],
    pub reference_solutions: &'static [(Language, &'static str)],
}

impl ProblemFixture {
    /// Builds the owned insert payload for this fixture.
    pub fn to_new_problem(&self) -> NewProblem {
        NewProblem {
            title: self.title.to_string(),
            description: self.description.to_string(),
            difficulty: self.difficulty,
            tags: self.tags.iter().map(|t| t.to_string()).collect(),
            companies: self.companies.iter().map(|c| c.to_string()).collect(),
            constraints: self.constraints.to_string(),
            hints: self.hints.map(str::to_string),
            editorial: self.editorial.map(str::to_string),
            testcases: self
                .testcases
                .iter()
                .map(|tc| TestCase {
                    input: tc.input.to_string(),
                    output: tc.output.to_string(),
                })
                .collect(),
            examples: self
                .examples
                .iter()
                .map(|(lang, ex)| {
                    (
                        *lang,
                        Example {
                            input: ex.input.to_string(),
                            output: ex.output.to_string(),
                            explanation: ex.explanation.to_string(),
                        },
                    )
                })
                .collect(),
            code_snippets: self
                .code_snippets
                .iter()
                .map(|(lang, code)| (*lang, code.to_string()))
                .collect(),
            reference_solutions: self
                .reference_solutions
                .iter()
                .map(|(lang, code)| ReferenceSolution {
                    language: *lang,
                    code: code.to_string(),
                })
                .collect(),
        }
    }
}

/// Returns every fixture in seeding order: sample, additional, then more.
pub fn all() -> Vec<&'static ProblemFixture> {
    SAMPLE.iter().chain(ADDITIONAL).chain(MORE).collect()
}
