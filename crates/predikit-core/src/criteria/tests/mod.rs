mod builder;
mod translate;
