mod optimizer_tests;
mod layout_tests;
