pub mod core;
pub mod analysis;
pub mod codec;
pub mod storage;
pub mod index;
pub mod scoring;
pub mod search;

/*
┌─────────────────────────────── FREETEXT ENGINE ───────────────────────────────┐
│                                                                                │
│  indexing:  text ─► analysis::Pipeline ─► index::indexer ─► codec ─► storage  │
│  querying:  text ─► analysis::Pipeline ─► search::executor ◄─ codec ◄─ store  │
│                                                                                │
│  core::engine::Engine                                                          │
│    config:   core::config::EngineConfig    // immutable after construction    │
│    pipeline: analysis::pipeline::Pipeline  // shared by both paths            │
│    store:    Box<dyn storage::Store>       // flat ordered string map         │
│                                                                                │
│  Persistent layout (one key namespace):                                        │
│    " "           -> "<docCount>,<totalTerms>,<freeHead>"                       │
│    "\t" + key    -> "<docId>"                                                  │
│    " " + docId   -> "<escapedTerms>:<docSize>,<callerKey>"                     │
│    <term>        -> "<postings>:<cfreq>"                                       │
│                                                                                │
└────────────────────────────────────────────────────────────────────────────────┘
*/
