//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by
//! `RUST_LOG`. Module paths are hidden (`with_target(false)`); the structured
//! fields (`entity_type`, `variant_id`, `status`) carry the context instead.
//!
//! ```bash
//! # Lifecycle and outcome of each submit
//! RUST_LOG=info variant-updater update --id 1028 --stock 20
//!
//! # Full payloads and response sizes
//! RUST_LOG=debug variant-updater update --id 1028 --stock 20
//!
//! # Only the catalog actor
//! RUST_LOG=variant_updater::framework=debug variant-updater list
//! ```
//!
//! With `RUST_LOG=debug` a submit reads roughly:
//!
//! ```text
//! DEBUG Get entity_type="VariantRecord" id=1028 found=true
//! INFO  select: Selected variant_id=1028 name=MEDIUM
//! DEBUG submit:post_update: Submitting data payload=VariantRecord { id: VariantId(1028), .. }
//! DEBUG submit:post_update: Response received status=200 bytes=16
//! INFO  Updated entity_type="VariantRecord" id=1028
//! INFO  submit: Update confirmed variant_id=1028 price=15.0 stock=20
//! ```

/// Initializes the global subscriber. Call once, from the binary.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
