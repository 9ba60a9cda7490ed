//! Tests for batch progress counters

#[cfg(test)]
mod tests {
    use tilehash::io::progress::ProgressManager;

    // Tests rendered and skipped keys are counted separately
    // Verified by counting skips as renders
    #[test]
    fn test_progress_counts() {
        let mut pm = ProgressManager::new();
        pm.initialize(3);
        pm.complete_key("a.png");
        pm.skip_key();
        pm.complete_key("b.png");
        pm.finish();

        assert_eq!(pm.rendered(), 2);
        assert_eq!(pm.skipped(), 1);
    }

    // Tests initialization resets counters for a new batch
    // Verified by keeping counts across batches
    #[test]
    fn test_progress_initialize_resets() {
        let mut pm = ProgressManager::default();
        pm.initialize(1);
        pm.complete_key("a.png");
        pm.initialize(2);

        assert_eq!(pm.rendered(), 0);
        assert_eq!(pm.skipped(), 0);
    }
}
