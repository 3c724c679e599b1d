pub trait SymbolSink {
    fn push_symbol(&mut self, symbol: char);
}

impl SymbolSink for String {
    fn push_symbol(&mut self, symbol: char) {
        self.push(symbol);
    }
}

impl SymbolSink for Vec<char> {
    fn push_symbol(&mut self, symbol: char) {
        self.push(symbol);
    }
}

impl SymbolSink for Vec<u8> {
    fn push_symbol(&mut self, symbol: char) {
        let mut buffer = [0u8; 4];
        self.extend_from_slice(symbol.encode_utf8(&mut buffer).as_bytes());
    }
}

impl<S: SymbolSink + ?Sized> SymbolSink for &mut S {
    fn push_symbol(&mut self, symbol: char) {
        (**self).push_symbol(symbol);
    }
}
