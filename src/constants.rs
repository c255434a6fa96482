// Mount point of the dev-ui single-page app. Also the marker used to detect
// a reverse-proxy path prefix inserted in front of it.
pub const DEV_UI_PATH: &str = "/dev-ui";

// Suffix appended to the page origin to form the app's base URL.
pub const DEV_UI_BASE_SUFFIX: &str = "/dev-ui/";
