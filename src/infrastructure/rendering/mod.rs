pub mod plotly_surface;

pub use plotly_surface::PlotlySurface;
