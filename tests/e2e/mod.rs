// End-to-end tests for the SSML TTS Backend HTTP API
//
// Each test starts the full router on an ephemeral port and talks to it over
// real HTTP. Synthesis goes either through an in-process mock repository
// (TestContext) or through the real Google repository pointed at a local
// mock of the token and synthesize endpoints (GoogleStackContext).

mod test_google_stack;
mod test_health;
