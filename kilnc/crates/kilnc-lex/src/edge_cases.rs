//! Edge case and property tests for kilnc-lex
