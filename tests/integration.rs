// Integration tests module

mod integration {
    mod config_test;
    mod panel_test;
}
