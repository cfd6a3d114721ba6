mod scalar;


pub use scalar::ScalarValue;
