pub mod mock_variant;
