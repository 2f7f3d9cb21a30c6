mod act_fn;
mod elu;
mod output_fn;
mod relu;
mod sigmoid;
mod softmax;
mod tanh;

pub use act_fn::ActFn;
pub use elu::{ELU_ALPHA, Elu};
pub use output_fn::OutputFn;
pub use relu::Relu;
pub use sigmoid::Sigmoid;
pub use softmax::SoftMax;
pub use tanh::Tanh;
