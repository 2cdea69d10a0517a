mod metadata_tests;
