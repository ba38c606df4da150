mod helpers_tests;
