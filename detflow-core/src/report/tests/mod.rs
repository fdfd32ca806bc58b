mod format_tests;
mod summary_tests;
