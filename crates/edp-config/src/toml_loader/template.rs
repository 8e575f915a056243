//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r#"# Elite Dangerous presence configuration
# Only override what you want to change -- missing fields use defaults.
# Files without `schema_version` are read as schema 1, where the preference
# is the top-level integer `disable_presence` (0 = enabled).
schema_version = 2

[presence]
# disabled = false
# client_id = 386149818227097610
# idle_message = "Connecting CMDR Interface"

[connection]
# retry_interval_ms = 100   # 10-60000
# pump_interval_ms = 100    # 10-10000

[journal]
# directory = "C:/Users/me/Saved Games/Frontier Developments/Elite Dangerous"
# poll_interval_ms = 250    # 50-60000

[logging]
# level = "info"            # trace, debug, info, warn, error
"#
}
