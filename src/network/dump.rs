use std::fmt;

use super::Network;

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let topology = self.topology();
        let config = self.config();

        writeln!(
            f,
            "network: input {}, hidden {}x{}, output {}",
            topology.input_dense(),
            topology.hidden_dense(),
            topology.hidden_layers(),
            topology.output_dense()
        )?;
        writeln!(
            f,
            "config: learning_rate {}, dropout {}, epochs {}, biases {}",
            config.learning_rate, config.dropout, config.epochs, config.use_biases
        )?;

        let Ok(layers) = self.layers() else {
            return write!(f, "<released>");
        };

        writeln!(f, "input:\n{}", layers.input())?;

        for (i, h) in layers.hidden().iter().enumerate() {
            writeln!(f, "hidden[{i}]:\n{h}")?;
        }

        writeln!(f, "output:\n{}", layers.output())?;

        for (i, w) in layers.weights().iter().enumerate() {
            writeln!(f, "weights[{i}] ({}x{}):\n{w}", w.rows(), w.cols())?;
        }

        write!(f, "biases:\n{}", layers.biases())
    }
}
