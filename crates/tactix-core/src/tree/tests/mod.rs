mod consistency_tests;
