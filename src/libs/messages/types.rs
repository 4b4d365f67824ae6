#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigFileNotFound,
    ConfigParseError,
    ConfigPortalMissing,
    PromptPortalUrl,
    PromptPortalLogin,
    PromptSelectTheme,
    PromptObjectiveHours,

    // === AUTHENTICATION MESSAGES ===
    WrongPassword(i32), // retry limit
    LoginSuccess(String),
    LoggedOut,
    TokenMissing(String),    // login
    SessionInvalidated,
    SessionExpired,

    // === SYNC MESSAGES ===
    SyncedAt(String), // timestamp
    SyncFailed(String),
    StaleData,
    NoCachedData,
    UsingCachedData(String), // last sync label

    // === DASHBOARD MESSAGES ===
    WeekHeader(String),  // week key
    TodayHeader(String), // day title
    NoWeekData,

    // === ABSENCE MESSAGES ===
    AbsenceSet(String, String), // date, section label
    AbsenceCleared(String),     // date
    InvalidAbsenceSection(String),
    InvalidDateFormat(String),

    // === PREFERENCE MESSAGES ===
    ThemeUpdated(String),
    ObjectiveUpdated(i64), // minutes
    UnknownTheme(String),
    PrefsPushed,
    PrefsPushFailed(String),
    NothingToUpdate,

    // === WIDGET MESSAGES ===
    WidgetPublished,
    WidgetUnchanged,
    WidgetCleared,

    // === WATCH MESSAGES ===
    WatchStarted(u64), // interval seconds
    WatchStopped,
    WatchRefreshFailed(String),
}
