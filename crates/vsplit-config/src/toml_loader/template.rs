//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# vsplit configuration
# Only override what you want to change -- missing fields use defaults.

[store]
# path = "~/.config/fakexrandr.bin"   # read by the faking layer
# format = "current"                  # current, legacy

[editor]
# canvas_width = 300                  # 100-4000, pixels

[logging]
# level = "warn"                      # trace, debug, info, warn, error; unset uses RUST_LOG
"##
    .to_string()
}
