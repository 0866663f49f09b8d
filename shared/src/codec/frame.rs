/// One wire-protocol message: an OSC address plus its typed argument list
pub type Frame = rosc::OscMessage;
