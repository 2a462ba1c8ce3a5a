/// A lightweight, serializable snapshot of the current scroll state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    pub offset: f64,
    /// Derived at capture time; restoring does not force it (the gates do).
    pub running: bool,
}

/// A lightweight, serializable snapshot of the measured layout.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutState {
    pub step: f64,
    pub measured: bool,
}

/// A combined snapshot of layout + scroll state.
///
/// This is useful for restoring carousel state across remounts without
/// coupling the engine to any specific UI framework.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameState {
    pub layout: LayoutState,
    pub scroll: ScrollState,
}
