#[derive(Debug, Clone)]
pub enum Message {
    // === CURRICULUM MESSAGES ===
    LessonsHeader(usize),         // total lessons
    LessonsFiltered(usize, usize), // shown, total
    NoLessonsMatch,
    ExtraLessonsLoaded(usize, String), // count, directory
    LessonHeader {
        day: u32,
        title: String,
        origin: String,
    },
    DuplicateDayRecords(u32, usize), // day, count
    LessonCategory(String),
    ObjectivesHeader,
    KeyTermsHeader,
    ExercisesHeader,
    ExplanationHeader,

    // === INDEX MESSAGES ===
    IndexHeader(usize), // categories
    CategoryHeader {
        category: String,
        first_day: u32,
        lessons: usize,
    },

    // === AUDIT MESSAGES ===
    AuditHeader,
    AuditSummary {
        total: usize,
        unique_days: usize,
    },
    AuditComplete,
    AuditDuplicates(String),
    AuditMissing(String),
    AuditOutOfRange(String),

    // === EXPORT MESSAGES ===
    ExportingData(String, String), // data, format
    ExportCompleted(String),       // path

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigNotFound,
    ConfigModuleLessons,
    ConfigModuleExport,

    // === PROMPTS ===
    PromptSelectModules,
    PromptExtraLessonsDir,
    PromptExportFormat,
    PromptExportOutputDir,
}
