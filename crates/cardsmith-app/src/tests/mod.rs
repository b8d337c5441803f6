mod build_deck_tests;
mod enrich_tests;
