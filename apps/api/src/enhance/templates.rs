// Canned phrases used by the template enhancer.
// Summary openers are followed by the lower-cased user text and SUMMARY_CLOSING;
// experience sentences are appended after the user text.

pub const SUMMARY_TEMPLATES: [&str; 4] = [
    "Results-driven professional with proven expertise in",
    "Accomplished specialist with extensive experience in",
    "Dynamic leader with a track record of success in",
    "Innovative problem-solver with deep knowledge of",
];

pub const SUMMARY_CLOSING: &str =
    "Demonstrated ability to drive innovation and deliver exceptional results in fast-paced environments.";

pub const EXPERIENCE_TEMPLATES: [&str; 4] = [
    "Successfully led cross-functional teams to deliver high-impact projects, resulting in significant improvements to system performance and user experience.",
    "Spearheaded the development and implementation of scalable solutions, driving operational efficiency and reducing costs by implementing best practices.",
    "Collaborated with stakeholders to identify opportunities for process optimization, leading to measurable improvements in productivity and quality.",
    "Mentored junior developers and established coding standards that improved code quality and reduced technical debt across multiple projects.",
];

pub const FALLBACK_PREFIX: &str = "Enhanced: ";
