mod support;

mod path_tests;
