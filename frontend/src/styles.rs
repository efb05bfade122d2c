pub const PAGE: &str = "min-h-screen flex flex-col bg-gray-50 dark:bg-gray-900";
pub const HEADER: &str = "w-full bg-white/80 dark:bg-gray-800/80 backdrop-blur-md border-b border-gray-200/50 dark:border-gray-700/50";
pub const HEADER_INNER: &str = "max-w-4xl mx-auto px-4 sm:px-6 h-16 flex items-center justify-between";
pub const MAIN: &str = "flex-1 w-full max-w-4xl mx-auto px-4 sm:px-6 py-8";
pub const FOOTER: &str = "w-full py-4 text-center text-sm text-gray-500 dark:text-gray-400 border-t border-gray-200/50 dark:border-gray-700/50";

pub const CARD: &str = "bg-white dark:bg-gray-800 rounded-2xl shadow-xl dark:shadow-[0_8px_30px_-12px_rgba(255,255,255,0.1)] border border-gray-100 dark:border-gray-700 p-6 sm:p-8";

pub const TEXT_H1: &str = "text-xl sm:text-2xl font-bold text-gray-900 dark:text-white";
pub const TEXT_H2: &str = "text-2xl font-bold text-gray-900 dark:text-white";
pub const TEXT_BODY: &str = "text-gray-600 dark:text-gray-300";
pub const TEXT_SMALL: &str = "text-sm text-gray-500 dark:text-gray-400";
pub const TEXT_LABEL: &str = "block text-sm font-medium text-gray-900 dark:text-white";

pub const SCORE_BADGE: &str = "px-3 py-1 rounded-full text-sm font-semibold bg-blue-100 text-blue-700 dark:bg-blue-900/50 dark:text-blue-300";

pub const BUTTON_PRIMARY: &str = "inline-flex items-center justify-center px-4 py-2 rounded-lg font-medium text-white bg-gradient-to-r from-blue-600 to-blue-700 hover:from-blue-700 hover:to-blue-800 shadow-lg transition-all duration-300 disabled:opacity-50 disabled:cursor-not-allowed";
pub const BUTTON_SECONDARY: &str = "inline-flex items-center justify-center px-4 py-2 rounded-lg font-medium border border-gray-300 dark:border-gray-600 text-gray-900 dark:text-white hover:bg-gray-50 dark:hover:bg-gray-700";
pub const BUTTON_DANGER: &str = "inline-flex items-center justify-center rounded-lg bg-red-600 px-4 py-2 font-medium text-white hover:bg-red-700";
pub const BUTTON_ICON: &str = "p-2 text-gray-800 dark:text-white hover:text-blue-600 dark:hover:text-blue-400 rounded-lg transition-colors duration-200";

pub const INPUT: &str = "mt-2 block w-full rounded-lg border-0 bg-white dark:bg-gray-900 py-2 px-3 text-gray-900 dark:text-white shadow-sm ring-1 ring-inset ring-gray-300 dark:ring-gray-700 placeholder:text-gray-400 focus:ring-2 focus:ring-blue-600";
pub const INPUT_BARE: &str = "block w-full rounded-lg border-0 bg-white dark:bg-gray-900 py-2 px-3 text-gray-900 dark:text-white shadow-sm ring-1 ring-inset ring-gray-300 dark:ring-gray-700 placeholder:text-gray-400 focus:ring-2 focus:ring-blue-600";

pub const VIEW_TOGGLE: &str = "inline-flex rounded-lg border border-gray-300 dark:border-gray-600 overflow-hidden";
pub const VIEW_TOGGLE_ACTIVE: &str = "px-4 py-2 text-sm font-medium bg-blue-600 text-white";
pub const VIEW_TOGGLE_IDLE: &str = "px-4 py-2 text-sm font-medium text-gray-700 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-gray-700";

pub const MODAL_OVERLAY: &str = "fixed inset-0 z-[1100] bg-black/70 backdrop-blur-md overflow-y-auto";
pub const MODAL_CENTER: &str = "flex min-h-full items-center justify-center p-4";
pub const MODAL_PANEL: &str = "relative w-full max-w-lg transform overflow-hidden rounded-2xl bg-white dark:bg-gray-800 text-left shadow-xl transition-all";
pub const MODAL_PANEL_WIDE: &str = "relative w-full max-w-2xl transform overflow-hidden rounded-2xl bg-white dark:bg-gray-800 text-left shadow-xl transition-all";
pub const MODAL_CLOSE: &str = "absolute top-3 right-3 p-2 rounded-lg text-gray-400 hover:text-gray-600 dark:hover:text-gray-200 transition-colors";

pub const ALERT_ERROR: &str = "bg-red-50 dark:bg-red-900/50 border border-red-200 dark:border-red-800 rounded-lg p-4 text-red-700 dark:text-red-200";
