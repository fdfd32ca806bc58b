mod conf_tests;
