//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# Concierge Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[backend]
# url = "http://127.0.0.1:8000/chat"
# connect_timeout = 10   # seconds, 1-60
# request_timeout = 60   # seconds, 1-600

[session]
# user_id = "GUEST"      # replaced when the backend assigns an id
# latitude = 19.10       # sent until a location fix arrives
# longitude = 72.78

[location]
# provider = "ip"        # ip, fixed, disabled
# lookup_url = "https://ipapi.co/json/"
# timeout = 10           # seconds, 1-60
# first_submit_wait_ms = 0   # 0-10000, 0 = never wait for the lookup
# latitude = 19.10       # required when provider = "fixed"
# longitude = 72.78

[display]
# markdown = true
# pending_text = "Typing..."
# show_timestamps = false
# no_color = false

[logging]
# level = "INFO"         # DEBUG, INFO, WARNING, ERROR
"##
}
