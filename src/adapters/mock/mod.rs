pub mod clock;
pub mod id_generator;

#[allow(unused_imports)]
pub use clock::FixedClock;
#[allow(unused_imports)]
pub use id_generator::SequentialIdGenerator;
