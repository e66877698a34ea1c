use criterion::criterion_main;


criterion_main!(core::core_benches, pipeline::pipeline_benches);
