#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    PromptSelectModules,
    ConfigModuleMonitor,
    ConfigModuleTracker,
    PromptIdleThreshold,
    PromptFlushInterval,
    PromptFreshnessWindow,

    // === AUTH MESSAGES ===
    PromptUsername,
    PromptPassword,
    LoginSuccess(String),   // username
    LoginFailed(String),    // reason
    RegisterSuccess(String),
    RegisterFailed(String),
    LogoutSuccess,
    NotLoggedIn,
    VaultNotConfigured,

    // === TRACK SESSION MESSAGES ===
    SessionStarted { files: usize, employee: String, work_type: String, shift: String },
    SessionHotkeyHelp,
    SessionEnded,
    QueueEmpty,
    AllItemsDone,
    ItemAdded(String),      // display text
    ItemOpened(String),     // display text
    ItemStarted(String),    // display text
    ItemPaused(String),     // display text
    ItemResumed(String),    // display text
    ItemCompleted(String, String), // display text, elapsed
    IdleAutoPause(String),  // display text
    NothingToStart,
    FileOpenFailed(String, String), // filename, error
    FreshnessWarning(String, u64),  // filename, window seconds
    FreshnessOverridePrompt,

    // === SYNC MESSAGES ===
    RecordDelivered(String),   // filename
    RecordQueuedOffline(String),
    RecordLost(String, String), // filename, error
    SyncedEntries(usize),
    SyncNothingPending,
    SyncPending(usize),
    SyncOffline,
    ConnectionOnline,
    ConnectionOffline,

    // === ENTRIES MESSAGES ===
    EntriesHeader(String), // employee
    NoEntriesFound,
    EntriesExported(String), // path
}
